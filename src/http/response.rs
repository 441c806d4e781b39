//! HTTP response building module
//!
//! Responses are materialized in full before a single write. No
//! `Content-Length` is sent; the client reads until the connection closes.

use hyper::body::Bytes;
use hyper::StatusCode;

use super::request::ParsedRequest;

/// Body returned for every GET
pub const GREETING: &str = "Hello World";

/// Build the bytes sent back for a classified request
///
/// An unrecognized request gets an empty response.
pub fn build_response(request: &ParsedRequest) -> Bytes {
    match request {
        ParsedRequest::Get => build_get_response(),
        ParsedRequest::Post { body, content_type } => build_post_response(body, content_type),
        ParsedRequest::Unrecognized => Bytes::new(),
    }
}

/// Status sent for a classified request, `None` when nothing is sent
pub const fn response_status(request: &ParsedRequest) -> Option<StatusCode> {
    match request {
        ParsedRequest::Get | ParsedRequest::Post { .. } => Some(StatusCode::OK),
        ParsedRequest::Unrecognized => None,
    }
}

/// Build the fixed greeting response
pub fn build_get_response() -> Bytes {
    build_ok_response(b"text/plain", GREETING.as_bytes())
}

/// Build the echo response for a POST
pub fn build_post_response(body: &[u8], content_type: &[u8]) -> Bytes {
    build_ok_response(content_type, body)
}

fn build_ok_response(content_type: &[u8], body: &[u8]) -> Bytes {
    let status = StatusCode::OK;
    let status_line = format!(
        "HTTP/1.1 {} {}\r\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    );

    let mut response = Vec::with_capacity(status_line.len() + content_type.len() + body.len() + 64);
    response.extend_from_slice(status_line.as_bytes());
    response.extend_from_slice(b"Content-Type: ");
    response.extend_from_slice(content_type);
    response.extend_from_slice(b"\r\nAccess-Control-Allow-Origin: *\r\n\r\n");
    response.extend_from_slice(body);

    Bytes::from(response)
}
