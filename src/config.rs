use std::env;
use std::net::SocketAddr;

use tracing::warn;

/// Address served when `BINGO_CALLER_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: DEFAULT_BIND_ADDR.parse().unwrap(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `BINGO_CALLER_ADDR` overrides the bind address; an unparseable value
    /// falls back to the default.
    pub fn from_env() -> Self {
        match env::var("BINGO_CALLER_ADDR") {
            Ok(raw) => match raw.parse() {
                Ok(bind_addr) => ServerConfig { bind_addr },
                Err(_) => {
                    warn!(value = %raw, "invalid BINGO_CALLER_ADDR, using default");
                    ServerConfig::default()
                }
            },
            Err(_) => ServerConfig::default(),
        }
    }
}
