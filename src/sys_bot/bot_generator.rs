use crate::sys_bot::bot_errors::AiError;

/// Generative fallback used when no static rule answers the message.
pub trait ReplyGenerator: Send + Sync {
    fn generate_reply(&self, text: &str) -> Result<String, AiError>;
}
