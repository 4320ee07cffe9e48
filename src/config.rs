//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//! 1. Environment variables (prefix: HELLO_)
//! 2. Current working directory: ./config.toml
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    #[serde(default = "default_name")]
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_name() -> String {
    "hello-api".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: default_name(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
            },
        }
    }
}

impl Config {
    /// Load configuration from defaults, config.toml, and the environment
    pub fn load() -> Result<Self> {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("HELLO_"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the loaded configuration
    pub fn validate(&self) -> Result<()> {
        if self.service.name.is_empty() {
            return Err(Error::Config(Box::new(figment::Error::from(
                "service.name cannot be empty".to_string(),
            ))));
        }

        if self.service.port == 0 {
            return Err(Error::Config(Box::new(figment::Error::from(
                "service.port must be greater than 0".to_string(),
            ))));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.service.log_level.as_str()) {
            return Err(Error::Config(Box::new(figment::Error::from(format!(
                "service.log_level must be one of: {}",
                valid_log_levels.join(", ")
            )))));
        }

        Ok(())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.name, "hello-api");
        assert_eq!(config.service.port, 8080);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn rejects_zero_port() {
        let mut config = Config::default();
        config.service.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_name() {
        let mut config = Config::default();
        config.service.name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut config = Config::default();
        config.service.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }
}
