use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, warn};
use trust_dns_resolver::{
    Resolver, TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    system_conf,
};

#[cfg(test)]
use mockall::automock;

use crate::error::LookupError;

/// Resolves whether a domain has usable mail infrastructure.
///
/// Implementations report failures as [`LookupError`]; the reachability cache
/// is the single place where those are folded into "unreachable".
///
/// Both methods must agree for the same domain: they are the blocking and the
/// suspending form of one lookup.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DomainResolver: Send + Sync {
    /// Looks the domain up, blocking the calling thread until done.
    fn resolve_blocking(&self, domain: &str) -> Result<bool, LookupError>;

    /// Looks the domain up, yielding to the runtime while the query is outstanding.
    async fn resolve(&self, domain: &str) -> Result<bool, LookupError>;
}

/// [`DomainResolver`] backed by the host's DNS configuration.
///
/// Follows RFC 5321 delivery rules:
/// 1. Checks for MX (Mail Exchange) records first
/// 2. Falls back to A/AAAA records if no MX records are found
pub struct DnsResolver {
    config: ResolverConfig,
    opts: ResolverOpts,
    sync_resolver: OnceLock<Resolver>,
    async_resolver: OnceCell<TokioAsyncResolver>,
}

impl DnsResolver {
    /// Creates a resolver from the system configuration (`/etc/resolv.conf`
    /// or the platform equivalent), with custom timeout and attempt count.
    ///
    /// If the system configuration cannot be read, the resolver falls back to
    /// the library's default upstream servers.
    pub fn from_system_conf(timeout: Duration, attempts: usize) -> Self {
        let (config, mut opts) = match system_conf::read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                warn!(error = %e, "Could not read system DNS configuration, using defaults");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        opts.timeout = timeout;
        opts.attempts = attempts;

        Self::new(config, opts)
    }

    pub fn new(config: ResolverConfig, opts: ResolverOpts) -> Self {
        Self {
            config,
            opts,
            sync_resolver: OnceLock::new(),
            async_resolver: OnceCell::new(),
        }
    }

    /// Runs the lookup with the synchronous resolver.
    ///
    /// The synchronous resolver drives its own runtime, which is not allowed
    /// on a thread that is already inside one, so in that case the lookup runs
    /// on a scoped helper thread.
    fn lookup_blocking(&self, domain: &str) -> Result<bool, LookupError> {
        if tokio::runtime::Handle::try_current().is_err() {
            return self.lookup_with_sync_resolver(domain);
        }

        std::thread::scope(|scope| {
            scope
                .spawn(|| self.lookup_with_sync_resolver(domain))
                .join()
                .map_err(|_| LookupError::Task("blocking lookup thread panicked".to_string()))?
        })
    }

    fn lookup_with_sync_resolver(&self, domain: &str) -> Result<bool, LookupError> {
        let resolver = self.sync_resolver()?;

        match resolver.mx_lookup(domain) {
            Ok(records) if records.iter().next().is_some() => return Ok(true),
            Ok(_) => debug!(domain, "No MX records, falling back to address records"),
            Err(e) => debug!(domain, error = %e, "MX lookup failed, falling back to address records"),
        }

        let addresses = resolver.lookup_ip(domain)?;
        Ok(addresses.iter().next().is_some())
    }

    /// Synchronous resolver, built on first use and reused afterwards.
    fn sync_resolver(&self) -> Result<&Resolver, LookupError> {
        if let Some(resolver) = self.sync_resolver.get() {
            return Ok(resolver);
        }

        let resolver =
            Resolver::new(self.config.clone(), self.opts.clone()).map_err(LookupError::Setup)?;
        Ok(self.sync_resolver.get_or_init(|| resolver))
    }

    async fn async_resolver(&self) -> &TokioAsyncResolver {
        self.async_resolver
            .get_or_init(|| async {
                TokioAsyncResolver::tokio(self.config.clone(), self.opts.clone())
            })
            .await
    }
}

impl Drop for DnsResolver {
    // The synchronous resolver owns a runtime, and tokio refuses to shut a
    // runtime down from async context.
    fn drop(&mut self) {
        if let Some(resolver) = self.sync_resolver.take()
            && tokio::runtime::Handle::try_current().is_ok()
        {
            std::thread::spawn(move || drop(resolver));
        }
    }
}

#[async_trait]
impl DomainResolver for DnsResolver {
    fn resolve_blocking(&self, domain: &str) -> Result<bool, LookupError> {
        self.lookup_blocking(domain)
    }

    async fn resolve(&self, domain: &str) -> Result<bool, LookupError> {
        let resolver = self.async_resolver().await;

        match resolver.mx_lookup(domain).await {
            Ok(records) if records.iter().next().is_some() => return Ok(true),
            Ok(_) => debug!(domain, "No MX records, falling back to address records"),
            Err(e) => debug!(domain, error = %e, "MX lookup failed, falling back to address records"),
        }

        let addresses = resolver.lookup_ip(domain).await?;
        Ok(addresses.iter().next().is_some())
    }
}
