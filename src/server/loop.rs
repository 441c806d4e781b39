// Server loop module
// Accepts and serves one connection at a time

use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::error::SetupError;
use crate::logger;

/// Accept loop.
///
/// Each connection is read, answered and closed before the next `accept`
/// runs. Only returns on an accept failure, which is fatal.
pub async fn start_server_loop(listener: TcpListener) -> Result<(), SetupError> {
    loop {
        let (stream, peer_addr) = listener.accept().await.map_err(SetupError::Accept)?;
        logger::log_connection_accepted(&peer_addr);

        handle_connection(stream, peer_addr).await;
    }
}
