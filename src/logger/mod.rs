//! Logger module
//!
//! Provides logging utilities for the echo server:
//! - Server lifecycle logging
//! - One access line per connection
//! - Warning, error and fatal logging

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

use crate::config::Config;
use crate::error::SetupError;

/// Write to info/access log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_starting(config: &Config) {
    write_info(&format!(
        "Starting server on http://{}",
        config.display_addr()
    ));
}

pub fn log_server_start(addr: &SocketAddr, backlog: i32) {
    write_info("======================================");
    write_info("Echo server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Listen backlog: {backlog}"));
    write_info("Serving one connection at a time");
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    write_info(&entry.format());
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Fatal setup failures go to stdout as a single line
pub fn log_fatal(err: &SetupError) {
    write_info(&err.to_string());
}
