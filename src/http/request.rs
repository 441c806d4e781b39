//! Request classification module
//!
//! Classifies the raw bytes of a single read by substring search. There is no
//! request-line parse: `GET` or `POST` anywhere in the text decides the method,
//! so a header value or body containing `GET` turns a POST into a GET.

use hyper::body::Bytes;

/// Capacity of the single read performed per connection
pub const REQUEST_BUFFER_SIZE: usize = 1024;

/// Content-Type echoed when a POST carries no `Content-Type: ` header
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const HEADER_SEPARATOR: &[u8] = b"\r\n\r\n";
const LINE_TERMINATOR: &[u8] = b"\r\n";
const CONTENT_TYPE_HEADER: &[u8] = b"Content-Type: ";

/// Outcome of classifying one request buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRequest {
    /// `GET` found anywhere in the request
    Get,
    /// `POST` found (and no `GET`)
    Post {
        /// Everything after the first blank-line separator
        body: Bytes,
        /// Value of the first `Content-Type: ` occurrence
        content_type: Bytes,
    },
    /// Neither keyword present
    Unrecognized,
}

impl ParsedRequest {
    /// Method label used in the access log
    pub const fn method_label(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post { .. } => "POST",
            Self::Unrecognized => "-",
        }
    }
}

/// Classify the bytes read from a connection
pub fn parse_request(raw: &[u8]) -> ParsedRequest {
    let text = request_text(raw);

    if find(text, b"GET").is_some() {
        ParsedRequest::Get
    } else if find(text, b"POST").is_some() {
        ParsedRequest::Post {
            body: Bytes::copy_from_slice(post_body(text)),
            content_type: Bytes::copy_from_slice(content_type(text)),
        }
    } else {
        ParsedRequest::Unrecognized
    }
}

/// The request text ends at the first NUL byte, like a C string
fn request_text(raw: &[u8]) -> &[u8] {
    raw.iter()
        .position(|&b| b == 0)
        .map_or(raw, |nul| &raw[..nul])
}

fn post_body(text: &[u8]) -> &[u8] {
    find(text, HEADER_SEPARATOR).map_or(&[][..], |pos| &text[pos + HEADER_SEPARATOR.len()..])
}

fn content_type(text: &[u8]) -> &[u8] {
    let Some(pos) = find(text, CONTENT_TYPE_HEADER) else {
        return DEFAULT_CONTENT_TYPE.as_bytes();
    };

    let value = &text[pos + CONTENT_TYPE_HEADER.len()..];
    // Header value without a terminator runs to the end of the request text
    find(value, LINE_TERMINATOR).map_or(value, |end| &value[..end])
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(body: &str, content_type: &str) -> ParsedRequest {
        ParsedRequest::Post {
            body: Bytes::copy_from_slice(body.as_bytes()),
            content_type: Bytes::copy_from_slice(content_type.as_bytes()),
        }
    }

    #[test]
    fn test_get_request() {
        let parsed = parse_request(b"GET /anything HTTP/1.1\r\nHost: localhost\r\n\r\n");
        assert_eq!(parsed, ParsedRequest::Get);
        assert_eq!(parsed.method_label(), "GET");
    }

    #[test]
    fn test_post_with_content_type() {
        let parsed =
            parse_request(b"POST /x HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{\"a\":1}");
        assert_eq!(parsed, post("{\"a\":1}", "application/json"));
    }

    #[test]
    fn test_post_without_content_type_defaults() {
        let parsed = parse_request(b"POST /x HTTP/1.1\r\nHost: localhost\r\n\r\nhello");
        assert_eq!(parsed, post("hello", "application/octet-stream"));
    }

    #[test]
    fn test_post_without_separator_has_empty_body() {
        let parsed = parse_request(b"POST /x HTTP/1.1\r\nContent-Type: text/plain\r\n");
        assert_eq!(parsed, post("", "text/plain"));
    }

    #[test]
    fn test_post_body_keeps_later_separators() {
        let parsed = parse_request(b"POST / HTTP/1.1\r\n\r\nline1\r\n\r\nline2");
        assert_eq!(
            parsed,
            post("line1\r\n\r\nline2", "application/octet-stream")
        );
    }

    #[test]
    fn test_content_type_without_terminator_runs_to_end() {
        let parsed = parse_request(b"POST / HTTP/1.1\r\nContent-Type: text/csv");
        assert_eq!(parsed, post("", "text/csv"));
    }

    #[test]
    fn test_unrecognized_method() {
        let parsed = parse_request(b"PUT /x HTTP/1.1\r\nHost: localhost\r\n\r\n");
        assert_eq!(parsed, ParsedRequest::Unrecognized);
        assert_eq!(parsed.method_label(), "-");
        assert_eq!(parse_request(b""), ParsedRequest::Unrecognized);
    }

    #[test]
    fn test_get_anywhere_wins_over_post() {
        // Substring match: the body mentions GET, so this is served as a GET
        let parsed = parse_request(b"POST /x HTTP/1.1\r\n\r\nplease GET me");
        assert_eq!(parsed, ParsedRequest::Get);
    }

    #[test]
    fn test_text_stops_at_nul() {
        let mut buffer = [0u8; REQUEST_BUFFER_SIZE];
        let request = b"POST / HTTP/1.1\r\n\r\nabc";
        buffer[..request.len()].copy_from_slice(request);
        buffer[request.len() + 1..request.len() + 4].copy_from_slice(b"GET");

        assert_eq!(
            parse_request(&buffer),
            post("abc", "application/octet-stream")
        );
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        assert_eq!(
            parse_request(b"get / HTTP/1.1\r\n\r\n"),
            ParsedRequest::Unrecognized
        );
    }
}
