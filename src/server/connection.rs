// Connection handling module
// Single-shot read, classify, respond and close for one client

use std::net::SocketAddr;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::{self, REQUEST_BUFFER_SIZE};
use crate::logger::{self, AccessLogEntry};

/// Serve one connection to completion.
///
/// Reads once, writes the whole response in one call, then shuts the stream
/// down. I/O errors are logged and never stop the accept loop.
pub async fn handle_connection<S>(mut stream: S, peer_addr: SocketAddr)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let started = Instant::now();
    let mut entry = AccessLogEntry::new(peer_addr.to_string());

    let mut buffer = [0u8; REQUEST_BUFFER_SIZE];
    let read = read_request(&mut stream, &mut buffer).await;

    let request = http::parse_request(&buffer[..read]);
    let response = http::build_response(&request);

    entry.method = request.method_label();
    entry.status = http::response_status(&request).map(|s| s.as_u16());
    entry.request_bytes = read;

    if !response.is_empty() {
        match stream.write_all(&response).await {
            Ok(()) => entry.body_bytes = response.len(),
            Err(e) => logger::log_error(&format!("Failed to write response to {peer_addr}: {e}")),
        }
    }

    if let Err(e) = stream.shutdown().await {
        logger::log_warning(&format!("Failed to close connection from {peer_addr}: {e}"));
    }

    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    logger::log_access(&entry);
}

/// Read at most one buffer's worth from the client.
///
/// Anything past `REQUEST_BUFFER_SIZE` is left unread. A failed read counts as
/// an empty request.
pub async fn read_request<R>(reader: &mut R, buffer: &mut [u8; REQUEST_BUFFER_SIZE]) -> usize
where
    R: AsyncRead + Unpin,
{
    match reader.read(buffer).await {
        Ok(n) => n,
        Err(e) => {
            logger::log_warning(&format!("Failed to read request: {e}"));
            0
        }
    }
}
