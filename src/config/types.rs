// Configuration types module
// Defines the listener configuration read from the environment

use serde::Deserialize;

/// Main configuration structure
///
/// Populated from the `HOST` and `PORT` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host name or dotted-quad address to listen on
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
}
