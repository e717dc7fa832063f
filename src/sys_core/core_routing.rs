// ----- Imports ----- //

use crate::sys_bot::{bot_handlers::handle_manychat_webhook, Responder};
use crate::sys_core::core_responses::{
    response_method_not_allowed, response_not_found, response_ok,
};

// ----- Structs ----- //

pub struct HttpResponse {
    pub status_line: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

// ----- Implementations ----- //

impl HttpResponse {
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = format!(
            "{}\r\nContent-Length: {}\r\nContent-Type: {}\r\nConnection: close\r\n\r\n",
            self.status_line,
            self.body.len(),
            self.content_type
        );
        let mut response = header.into_bytes();
        response.extend_from_slice(&self.body);
        response
    }
}

// ----- Routing ----- //

pub fn handle_route(method: &str, path: &str, responder: &Responder, body: &str) -> HttpResponse {
    // Strip query parameters (anything after '?')
    let clean_path = path.split('?').next().unwrap_or("/");

    match (method, clean_path) {
        ("GET", "/") => handle_health(),
        ("POST", "/manychat-ai") => handle_manychat_webhook(body, responder),
        (_, "/") | (_, "/manychat-ai") => response_method_not_allowed(),
        _ => {
            log::debug!("No route for {} {}", method, clean_path);
            response_not_found("Not found")
        }
    }
}

fn handle_health() -> HttpResponse {
    response_ok("text/plain; charset=utf-8", b"OK".to_vec())
}

// ----- Tests ----- //
