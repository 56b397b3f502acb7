//! Error types for the email domain validator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use trust_dns_resolver::error::ResolveError;

/// Startup error. This is the only error that escapes the validator; every
/// per-address check reports through its boolean result instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read disposable domain list {path:?}: {source}")]
    DisposableList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure while resolving a domain's mail infrastructure.
///
/// Never returned to callers of the reachability cache: it is logged and
/// folded into an "unreachable" result.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("DNS lookup failed: {0}")]
    Dns(#[from] ResolveError),

    #[error("failed to build resolver: {0}")]
    Setup(#[source] io::Error),

    #[error("lookup task failed: {0}")]
    Task(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
