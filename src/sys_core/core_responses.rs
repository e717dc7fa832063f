// ----- Imports ----- //

use serde_json::json;

use crate::sys_core::core_routing::HttpResponse;

// ----- Responses ----- //
pub fn response_ok(content_type: &'static str, body: Vec<u8>) -> HttpResponse {
    HttpResponse {
        status_line: "HTTP/1.1 200 OK",
        content_type,
        body,
    }
}

pub fn response_not_found(msg: &str) -> HttpResponse {
    HttpResponse {
        status_line: "HTTP/1.1 404 NOT FOUND",
        content_type: "text/plain; charset=utf-8",
        body: msg.as_bytes().to_vec(),
    }
}

pub fn response_method_not_allowed() -> HttpResponse {
    HttpResponse {
        status_line: "HTTP/1.1 405 METHOD NOT ALLOWED",
        content_type: "text/plain; charset=utf-8",
        body: b"Method not allowed".to_vec(),
    }
}

pub fn response_internal_error(msg: &str) -> HttpResponse {
    HttpResponse {
        status_line: "HTTP/1.1 500 INTERNAL SERVER ERROR",
        content_type: "application/json; charset=utf-8",
        body: json!({ "error": msg }).to_string().into_bytes(),
    }
}

// Upstream (AI provider) failure, reported as a generic JSON error
pub fn response_bad_gateway(msg: &str) -> HttpResponse {
    HttpResponse {
        status_line: "HTTP/1.1 502 BAD GATEWAY",
        content_type: "application/json; charset=utf-8",
        body: json!({ "error": msg }).to_string().into_bytes(),
    }
}
