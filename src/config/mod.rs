// Configuration module entry point
// Loads the listen address from the environment and resolves it

mod types;

use std::net::{SocketAddr, ToSocketAddrs};

use crate::error::SetupError;

// Re-export public types
pub use types::Config;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, SetupError> {
        Self::load_from_env_map(None)
    }

    /// Load configuration from an explicit variable map instead of the process
    /// environment when `vars` is `Some`
    pub fn load_from_env_map(
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, SetupError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default().source(vars))
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// `host:port` as configured, before resolution
    pub fn display_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve `host:port` through the system resolver, taking the first address
    pub fn resolve_socket_addr(&self) -> Result<SocketAddr, SetupError> {
        let resolve_err = |source| SetupError::Resolve {
            addr: self.display_addr(),
            source,
        };

        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(resolve_err)?
            .next()
            .ok_or_else(|| {
                resolve_err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no addresses resolved",
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = Config::load_from_env_map(Some(vars(&[]))).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn test_host_and_port_from_env() {
        let env = vars(&[("HOST", "127.0.0.1"), ("PORT", "9090")]);
        let cfg = Config::load_from_env_map(Some(env)).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.display_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let env = vars(&[("PORT", "not-a-port")]);
        let err = Config::load_from_env_map(Some(env)).unwrap_err();
        assert!(matches!(err, SetupError::Config(_)));
    }

    #[test]
    fn test_resolve_dotted_quad() {
        let cfg = Config {
            host: "127.0.0.1".to_string(),
            port: 8081,
        };
        let addr = cfg.resolve_socket_addr().unwrap();
        assert_eq!(addr, "127.0.0.1:8081".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_resolve_hostname() {
        let cfg = Config {
            host: "localhost".to_string(),
            port: 0,
        };
        let addr = cfg.resolve_socket_addr().unwrap();
        assert!(addr.ip().is_loopback(), "got: {addr}");
    }
}
