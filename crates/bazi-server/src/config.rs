//! Server configuration.

use std::net::SocketAddr;

use bazi_oracle::ReadingConfig;

use crate::error::{ServerError, ServerResult};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Environment variable overriding the listen address.
pub const BIND_ENV: &str = "BAZI_BIND";

/// Environment variable overriding the fortune horizon.
pub const HORIZON_ENV: &str = "BAZI_HORIZON";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,
    /// Reading settings applied to every `/api/result` call.
    pub reading: ReadingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            reading: ReadingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Set the listen address.
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Set the fortune horizon (clamped like [`ReadingConfig::with_horizon`]).
    pub fn with_horizon(mut self, years: u32) -> Self {
        self.reading = self.reading.with_horizon(years);
        self
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> ServerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through a lookup function.
    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(BIND_ENV) {
            let bind = raw
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidBind(raw.clone()))?;
            config = config.with_bind(bind);
        }
        if let Some(raw) = lookup(HORIZON_ENV) {
            let years = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|&years| years > 0)
                .ok_or_else(|| ServerError::InvalidHorizon(raw.clone()))?;
            config = config.with_horizon(years);
        }
        Ok(config)
    }
}
