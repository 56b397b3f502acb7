//! Time-bounded cache of domain reachability results.
//!
//! Resolution is the only slow, failure-prone step of validation. Results are
//! memoized per domain for [`CACHE_TTL_SECS`], so a popular provider is
//! resolved once an hour instead of once per submitted address. Reachable and
//! unreachable results are cached alike, which keeps a dead domain from being
//! re-queried on every request until its entry expires.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use super::dnsmx::DomainResolver;
use super::domain_of;
use crate::error::LookupError;

/// Lifetime of a cache entry, in seconds.
pub const CACHE_TTL_SECS: i64 = 3600;

/// Source of the current time for entry expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Lets tests step past the TTL.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        *self.now.lock() += by;
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    reachable: bool,
    expires_at: DateTime<Utc>,
}

/// Memoizes [`DomainResolver`] answers per lowercase domain.
///
/// Safe to share between threads and tasks. The entry map is locked only to
/// read or write an entry, never across a lookup, so a slow resolution holds
/// up its own caller and nobody else. Concurrent misses on the same domain
/// each resolve independently.
pub struct ReachabilityCache {
    resolver: Arc<dyn DomainResolver>,
    clock: Arc<dyn Clock>,
    ttl: TimeDelta,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ReachabilityCache {
    pub fn new(resolver: Arc<dyn DomainResolver>) -> Self {
        Self::with_clock(resolver, Arc::new(SystemClock))
    }

    pub fn with_clock(resolver: Arc<dyn DomainResolver>, clock: Arc<dyn Clock>) -> Self {
        Self {
            resolver,
            clock,
            ttl: TimeDelta::seconds(CACHE_TTL_SECS),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Whether `domain` has usable mail infrastructure, blocking on a lookup
    /// when there is no fresh entry.
    ///
    /// Lookup failures of any kind count as unreachable.
    pub fn is_reachable(&self, domain: &str) -> bool {
        let key = normalize_domain(domain);
        if key.is_empty() {
            return false;
        }
        if let Some(reachable) = self.fresh_entry(&key) {
            return reachable;
        }

        debug!(domain = %key, "Reachability cache miss");
        let started = self.clock.now();
        let reachable = settle(&key, self.resolver.resolve_blocking(&key));
        self.store(key, reachable, started);
        reachable
    }

    /// Suspending form of [`is_reachable`](Self::is_reachable). Shares the
    /// same entries.
    pub async fn is_reachable_async(&self, domain: &str) -> bool {
        let key = normalize_domain(domain);
        if key.is_empty() {
            return false;
        }
        if let Some(reachable) = self.fresh_entry(&key) {
            return reachable;
        }

        debug!(domain = %key, "Reachability cache miss");
        let started = self.clock.now();
        let reachable = settle(&key, self.resolver.resolve(&key).await);
        self.store(key, reachable, started);
        reachable
    }

    /// Checks the domain of an email address (the part after the last `@`).
    pub fn has_valid_mx_records(&self, email: &str) -> bool {
        domain_of(email).is_some_and(|domain| self.is_reachable(domain))
    }

    pub async fn has_valid_mx_records_async(&self, email: &str) -> bool {
        match domain_of(email) {
            Some(domain) => self.is_reachable_async(domain).await,
            None => false,
        }
    }

    /// Cached answer for `domain`, if one exists and has not expired. Never
    /// triggers a lookup.
    pub fn cached(&self, domain: &str) -> Option<bool> {
        self.fresh_entry(&normalize_domain(domain))
    }

    /// Number of entries held, expired ones included.
    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }

    fn fresh_entry(&self, key: &str) -> Option<bool> {
        let now = self.clock.now();
        let entries = self.entries.read();
        let entry = entries.get(key).filter(|entry| now < entry.expires_at)?;

        debug!(domain = %key, reachable = entry.reachable, "Reachability cache hit");
        Some(entry.reachable)
    }

    /// Writes the result of a lookup that began at `started`.
    ///
    /// Expiry counts from the start of the lookup, so an entry written by a
    /// lookup that began later is never replaced by one that began earlier,
    /// whichever finishes last.
    fn store(&self, key: String, reachable: bool, started: DateTime<Utc>) {
        let fresh = CacheEntry {
            reachable,
            expires_at: started + self.ttl,
        };

        self.entries
            .write()
            .entry(key)
            .and_modify(|entry| {
                if entry.expires_at <= fresh.expires_at {
                    *entry = fresh;
                }
            })
            .or_insert(fresh);
    }
}

/// The one place lookup errors are absorbed: callers only need a yes/no gate.
fn settle(domain: &str, outcome: Result<bool, LookupError>) -> bool {
    outcome.unwrap_or_else(|e| {
        debug!(domain, error = %e, "Lookup failed, treating domain as unreachable");
        false
    })
}

fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_lowercase()
}
