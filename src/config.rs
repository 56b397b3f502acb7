//! Service configuration loaded from environment variables.
//!
//! `.env` files are honoured by the binary (see `main.rs`), which calls
//! `dotenv::dotenv()` before reading the configuration.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Runtime settings for the validator and its HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,
    /// Port the HTTP server binds to
    pub port: u16,
    /// Blocklist file; the embedded list is used when unset
    pub disposable_domains_path: Option<PathBuf>,
    /// Per-request DNS timeout
    pub dns_timeout: Duration,
    /// Number of DNS attempts before a lookup is considered failed
    pub dns_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            disposable_domains_path: None,
            dns_timeout: Duration::from_secs(2),
            dns_attempts: 2,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `HOST` | `127.0.0.1` |
    /// | `PORT` | `8080` |
    /// | `DISPOSABLE_DOMAINS_PATH` | embedded list |
    /// | `DNS_TIMEOUT_SECS` | `2` |
    /// | `DNS_ATTEMPTS` | `2` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT", defaults.port)?;
        let disposable_domains_path = lookup("DISPOSABLE_DOMAINS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let dns_timeout = parse_var(&lookup, "DNS_TIMEOUT_SECS", defaults.dns_timeout.as_secs())
            .map(Duration::from_secs)?;
        let dns_attempts = parse_var(&lookup, "DNS_ATTEMPTS", defaults.dns_attempts)?;

        Ok(Self {
            host,
            port,
            disposable_domains_path,
            dns_timeout,
            dns_attempts,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
