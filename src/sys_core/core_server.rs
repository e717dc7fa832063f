// ----- Imports ----- //

use std::{
    io::{self, Read, Write},
    net::{TcpListener, TcpStream},
    sync::Arc,
    thread,
    time::Duration,
};

use crate::{
    sys_bot::Responder,
    sys_core::{core_responses::response_method_not_allowed, core_routing::handle_route},
};

const MAX_REQUEST_BYTES: usize = 64 * 1024;
const REQUEST_READ_TIMEOUT: Duration = Duration::from_secs(10);

// ----- Structs ----- //

pub struct Server {
    address: String,
    responder: Arc<Responder>,
}

// ----- Implementations ----- //

impl Server {
    pub fn new(address: &str, responder: Responder) -> Self {
        Self {
            address: address.to_string(),
            responder: Arc::new(responder),
        }
    }

    pub fn run(&self) -> io::Result<()> {
        let listener = TcpListener::bind(&self.address)?;
        log::info!("Courseline running at http://{}/", self.address);

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let responder = Arc::clone(&self.responder);
                    thread::spawn(move || handle_client(stream, responder));
                }
                Err(err) => log::warn!("Failed to accept connection: {}", err),
            }
        }
        Ok(())
    }
}

// ----- Lifecycle ----- //

fn handle_client(mut stream: TcpStream, responder: Arc<Responder>) {
    if let Err(err) = configure_stream(&stream, REQUEST_READ_TIMEOUT) {
        log::debug!("Failed to configure connection: {}", err);
        return;
    }

    let raw = match read_request(&mut stream) {
        Ok(raw) => raw,
        Err(err) => {
            log::debug!("Failed to read request: {}", err);
            return;
        }
    };

    let request = String::from_utf8_lossy(&raw);

    // Parse the request line
    let mut lines = request.lines();
    let first_line = lines.next().unwrap_or("");
    let mut parts = first_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");

    // Extract body (after a blank line)
    let body = request
        .find("\r\n\r\n")
        .map(|i| &request[i + 4..])
        .unwrap_or("");

    log::debug!("{} {}", method, path);

    let response = match method {
        "GET" | "POST" => handle_route(method, path, &responder, body),
        _ => response_method_not_allowed(),
    };

    if let Err(err) = stream.write_all(&response.to_bytes()) {
        log::debug!("Failed to write response: {}", err);
    }
}

/// Reads one HTTP request: the header block, then `Content-Length` body bytes.
/// Stops early at EOF or once `MAX_REQUEST_BYTES` have been read.
pub fn read_request(stream: &mut impl Read) -> io::Result<Vec<u8>> {
    let mut request = Vec::new();
    let mut buffer = [0; 8192];
    let mut expected_len: Option<usize> = None;

    loop {
        if let Some(total) = expected_len {
            if request.len() >= total {
                break;
            }
        }
        if request.len() >= MAX_REQUEST_BYTES {
            request.truncate(MAX_REQUEST_BYTES);
            break;
        }

        let bytes_read = stream.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        request.extend_from_slice(&buffer[..bytes_read]);

        if expected_len.is_none() {
            if let Some(header_end) = find_header_end(&request) {
                let headers = String::from_utf8_lossy(&request[..header_end]);
                let body_len = content_length(&headers).min(MAX_REQUEST_BYTES);
                expected_len = Some((header_end + 4).saturating_add(body_len));
            }
        }
    }

    Ok(request)
}

// ----- Helpers ----- //

// A client that stalls mid-request gets a read error instead of holding the thread
fn configure_stream(stream: &TcpStream, timeout: Duration) -> io::Result<()> {
    stream.set_read_timeout(Some(timeout))
}

fn find_header_end(request: &[u8]) -> Option<usize> {
    request.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

// ----- Tests ----- //
