use crate::{
    sys_bot::{
        bot_errors::AiError, bot_generator::ReplyGenerator, bot_instructions::get_instructions,
    },
    sys_core::core_config::AppConfig,
};
use serde::{Deserialize, Serialize};

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_MODEL: &str = "gpt-4o-mini";
pub const OPENAI_MAX_TOKENS: u32 = 512;

#[derive(Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

/// Blocking chat-completions client. One request per call, no retry.
pub struct OpenAiClient {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    instructions: Option<String>,
}

impl OpenAiClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_url: OPENAI_API_URL.to_string(),
            api_key: api_key.to_string(),
            model: OPENAI_MODEL.to_string(),
            max_tokens: OPENAI_MAX_TOKENS,
            instructions: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let instructions = config.instructions_path.as_deref().map(get_instructions);

        Self::new(&config.openai_api_key)
            .with_api_url(&config.openai_api_url)
            .with_model(&config.openai_model)
            .with_max_tokens(config.openai_max_tokens)
            .with_instructions(instructions)
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_instructions(mut self, instructions: Option<String>) -> Self {
        self.instructions = instructions;
        self
    }

    fn build_request(&self, text: &str) -> OpenAIRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(instructions) = &self.instructions {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: instructions.clone(),
            });
        }
        messages.push(OpenAIMessage {
            role: "user".to_string(),
            content: text.to_string(),
        });

        OpenAIRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
        }
    }
}

impl ReplyGenerator for OpenAiClient {
    fn generate_reply(&self, text: &str) -> Result<String, AiError> {
        let request_body = self.build_request(text);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .map_err(AiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AiError::Status { status, body });
        }

        let parsed: OpenAIResponse = response.json().map_err(AiError::Decode)?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(AiError::EmptyResponse)
    }
}
