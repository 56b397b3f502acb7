use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set. The resolver crates are chatty at
/// `info`, so they are held to warnings.
pub const DEFAULT_LOG_FILTER: &str = "info,trust_dns_proto=warn,trust_dns_resolver=warn";

/// Installs the global `tracing` subscriber. Call once, at startup.
pub fn setup_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
