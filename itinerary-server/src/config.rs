//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 9080;

/// Default cap on tickets per request.
pub const DEFAULT_MAX_TICKETS: usize = 10_000;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the itinerary server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Maximum number of tickets accepted in one request.
    /// Larger requests are rejected before reconstruction.
    pub max_tickets: usize,
}

impl ServerConfig {
    /// Full socket address to bind, e.g. `127.0.0.1:8080`.
    pub const ADDR_VAR: &'static str = "ITINERARY_ADDR";

    /// Port only; the host stays `0.0.0.0`. Ignored if `ITINERARY_ADDR` is set.
    pub const PORT_VAR: &'static str = "PORT";

    pub const MAX_TICKETS_VAR: &'static str = "ITINERARY_MAX_TICKETS";

    /// Create a new configuration with the given parameters.
    pub fn new(addr: SocketAddr, max_tickets: usize) -> Self {
        Self { addr, max_tickets }
    }

    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// anything unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::ADDR_VAR) {
            config.addr = parse_var(Self::ADDR_VAR, value)?;
        } else if let Some(value) = lookup(Self::PORT_VAR) {
            let port: u16 = parse_var(Self::PORT_VAR, value)?;
            config.addr.set_port(port);
        }

        if let Some(value) = lookup(Self::MAX_TICKETS_VAR) {
            config.max_tickets = parse_var(Self::MAX_TICKETS_VAR, value)?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            max_tickets: DEFAULT_MAX_TICKETS,
        }
    }
}

fn parse_var<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
        value,
    })
}
