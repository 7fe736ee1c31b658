//! Server configuration from the environment.

/// Environment variable overriding the listen port.
pub const PORT_ENV_VAR: &str = "PORT";

/// Port used when `PORT` is absent or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Host the server binds to.
pub const BIND_HOST: &str = "0.0.0.0";

/// Errors that can occur while reading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The `PORT` variable is set but does not parse as a port number.
    #[error("invalid {PORT_ENV_VAR} value '{0}': expected an integer in 1..=65535")]
    InvalidPort(String),
}

/// Listen configuration for the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set to a non-empty
    /// value that is not a valid port number. An unset or empty `PORT`
    /// silently selects the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(PORT_ENV_VAR).ok();
        let port = parse_port(raw.as_deref())?;
        Ok(Self { port })
    }

    /// The `host:port` address string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{BIND_HOST}:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) if value.is_empty() => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
