//! Server configuration.

use config::{Config, Environment};
use gear_core::{Error, Result};
use gear_licensing::SharedSecret;
use serde::Deserialize;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,
    /// Secret used for every key signature.
    pub secret: SharedSecret,
}

#[derive(Deserialize)]
struct RawConfig {
    bind_addr: String,
    license_secret: Option<String>,
}

impl ServerConfig {
    /// Load from the process environment, after reading an optional `.env`.
    ///
    /// `LICENSE_SECRET` is required. `GEAR_BIND_ADDR` overrides the listen
    /// address.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::load(None)
    }

    /// Load from an explicit variable map instead of the process environment.
    pub fn load(vars: Option<config::Map<String, String>>) -> Result<Self> {
        let raw: RawConfig = Config::builder()
            .set_default("bind_addr", DEFAULT_BIND_ADDR)
            .map_err(config_error)?
            .add_source(Environment::with_prefix("GEAR").source(vars.clone()))
            .add_source(
                Environment::with_prefix("LICENSE")
                    .keep_prefix(true)
                    .source(vars),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)?;

        let secret = raw
            .license_secret
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Config("LICENSE_SECRET is not set".to_string()))?;

        let bind_addr = raw
            .bind_addr
            .parse()
            .map_err(|e| Error::Config(format!("invalid bind address {:?}: {}", raw.bind_addr, e)))?;

        Ok(Self {
            bind_addr,
            secret: SharedSecret::new(secret)?,
        })
    }
}

fn config_error(err: config::ConfigError) -> Error {
    Error::Config(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::load(vars(&[("LICENSE_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.secret.as_bytes(), b"s3cret");
    }

    #[test]
    fn test_bind_addr_override() {
        let config = ServerConfig::load(vars(&[
            ("LICENSE_SECRET", "s3cret"),
            ("GEAR_BIND_ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let err = ServerConfig::load(vars(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("LICENSE_SECRET")));

        let err = ServerConfig::load(vars(&[("LICENSE_SECRET", "")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = ServerConfig::load(vars(&[
            ("LICENSE_SECRET", "s3cret"),
            ("GEAR_BIND_ADDR", "not-an-addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("bind address")));
    }
}
