use serde::Serialize;
use serde_json::Value;

// ----- Inbound Message ----- //

pub struct InboundMessage {
    pub text: String,
}

impl InboundMessage {
    /// Lenient webhook parsing: a body that is not JSON, or has no string
    /// `text` field, yields an empty message instead of an error.
    pub fn from_json(body: &str) -> Self {
        let parsed: Value = serde_json::from_str(body).unwrap_or_default();
        let text = parsed
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        InboundMessage { text }
    }
}

// ----- Outbound Reply ----- //

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundReply {
    pub reply: String,
    pub ask_phone: bool,
}
