//! HTTP protocol layer module
//!
//! Classifies raw request bytes and builds the raw response bytes. Nothing here
//! touches a socket.

pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{parse_request, REQUEST_BUFFER_SIZE};
pub use response::{build_response, response_status};
