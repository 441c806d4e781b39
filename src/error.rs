//! Fatal setup errors
//!
//! Every variant maps to one step of bringing the listener up (or keeping the
//! accept loop alive). Any of them terminates the process with exit code 1.

use std::io;

use thiserror::Error;

/// Errors that stop the server before or while accepting connections
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to resolve address {addr}. errno: {errno}", errno = os_errno(.source))]
    Resolve {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start runtime. errno: {}", os_errno(.0))]
    Runtime(#[source] io::Error),

    #[error("Failed to create socket. errno: {}", os_errno(.0))]
    Socket(#[source] io::Error),

    #[error("Failed to set SO_REUSEADDR. errno: {}", os_errno(.0))]
    ReuseAddr(#[source] io::Error),

    #[error("Failed to bind to port {port}. errno: {errno}", errno = os_errno(.source))]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("Failed to listen on socket. errno: {}", os_errno(.0))]
    Listen(#[source] io::Error),

    #[error("Failed to grab connection. errno: {}", os_errno(.0))]
    Accept(#[source] io::Error),
}

/// OS error number carried by an I/O error, or the error text when there is none
fn os_errno(err: &io::Error) -> String {
    err.raw_os_error()
        .map_or_else(|| err.to_string(), |code| code.to_string())
}
