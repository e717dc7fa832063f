use crate::{
    sys_bot::{bot_reply::InboundMessage, bot_responder::Responder},
    sys_core::{
        core_responses::{response_bad_gateway, response_internal_error, response_ok},
        HttpResponse,
    },
};

const AI_FAILURE_MESSAGE: &str = "AI service is temporarily unavailable";
const SERIALIZE_FAILURE_MESSAGE: &str = "Failed to build reply";

// ----- Webhook Handlers ----- //

pub fn handle_manychat_webhook(body: &str, responder: &Responder) -> HttpResponse {
    let message = InboundMessage::from_json(body);
    log::debug!("Webhook message: {:?}", message.text);

    match responder.build_reply(&message.text) {
        Ok(reply) => {
            log::info!("Reply sent (ask_phone={})", reply.ask_phone);
            match serde_json::to_vec(&reply) {
                Ok(json) => response_ok("application/json; charset=utf-8", json),
                Err(err) => {
                    log::error!("Failed to serialize reply: {}", err);
                    response_internal_error(SERIALIZE_FAILURE_MESSAGE)
                }
            }
        }
        Err(err) => {
            log::error!("AI fallback failed: {}", err);
            response_bad_gateway(AI_FAILURE_MESSAGE)
        }
    }
}
