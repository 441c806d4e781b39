//! Access log format module
//!
//! One line per served connection, in a Common Log Format variant:
//! `$remote_addr - - [$time_local] "$method" $status $bytes_sent $bytes_read/$buffer_size $request_time`

use chrono::Local;

use crate::http::REQUEST_BUFFER_SIZE;

/// Access log entry for one connection
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client socket address
    pub remote_addr: String,
    /// Time the connection was accepted
    pub time: chrono::DateTime<Local>,
    /// Classified method (GET, POST, or `-`)
    pub method: &'static str,
    /// Response status, `None` when nothing was sent
    pub status: Option<u16>,
    /// Bytes read from the client
    pub request_bytes: usize,
    /// Bytes written back
    pub body_bytes: usize,
    /// Connection processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method: "-",
            status: None,
            request_bytes: 0,
            body_bytes: 0,
            request_time_us: 0,
        }
    }

    pub fn format(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let request_time = self.request_time_us as f64 / 1_000_000.0;

        format!(
            "{} - - [{}] \"{}\" {} {} {}/{} {request_time:.3}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.status
                .map_or_else(|| "-".to_string(), |s| s.to_string()),
            self.body_bytes,
            self.request_bytes,
            REQUEST_BUFFER_SIZE,
        )
    }
}
