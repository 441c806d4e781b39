// Listener module
// Creates the TCP listener with SO_REUSEADDR and a small backlog

use std::net::SocketAddr;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

use crate::error::SetupError;

/// Pending connections the kernel queues while one client is being served
pub const LISTEN_BACKLOG: i32 = 10;

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
///
/// Each setup step maps to its own `SetupError` variant so the fatal log line
/// names the step that failed. Must be called inside a Tokio runtime.
pub fn create_listener(addr: SocketAddr) -> Result<TcpListener, SetupError> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket =
        Socket::new(domain, Type::STREAM, Some(Protocol::TCP)).map_err(SetupError::Socket)?;

    // Allow rebinding while old connections sit in TIME_WAIT
    socket
        .set_reuse_address(true)
        .map_err(SetupError::ReuseAddr)?;

    socket.set_nonblocking(true).map_err(SetupError::Socket)?;

    socket
        .bind(&addr.into())
        .map_err(|source| SetupError::Bind {
            port: addr.port(),
            source,
        })?;

    socket.listen(LISTEN_BACKLOG).map_err(SetupError::Listen)?;

    // socket2::Socket -> std::net::TcpListener -> tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener).map_err(SetupError::Listen)
}
