use std::net::SocketAddr;

use thiserror::Error;
use tracing::info;

/// Environment variable for the bind host.
pub const HOST_ENV_VAR: &str = "HOST";
/// Environment variable for the HTTP port.
pub const PORT_ENV_VAR: &str = "PORT";
/// Environment variable for the cart service mailbox size.
pub const BUFFER_SIZE_ENV_VAR: &str = "CART_BUFFER_SIZE";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),
}

/// Runtime settings for the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            buffer_size: 100,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|name| std::env::var(name).ok())?;
        info!(host = %config.host, port = config.port, buffer_size = config.buffer_size, "Config loaded");
        Ok(config)
    }

    /// Builds a config from any variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_ENV_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_ENV_VAR) {
            config.port = parse(PORT_ENV_VAR, &port)?;
        }
        if let Some(size) = lookup(BUFFER_SIZE_ENV_VAR) {
            config.buffer_size = parse(BUFFER_SIZE_ENV_VAR, &size)?;
            if config.buffer_size == 0 {
                return Err(ConfigError::InvalidValue {
                    name: BUFFER_SIZE_ENV_VAR,
                    value: size,
                });
            }
        }

        config.bind_addr()?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
