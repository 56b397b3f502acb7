//! Email intake validation pipeline.
//!
//! Checks run cheapest and most certain first and stop at the first failure:
//! 1. empty or whitespace-only input
//! 2. address format
//! 3. disposable domain blocklist
//! 4. domain reachability (cached DNS lookup)

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::handlers::validation::disposable::DisposableDomains;
use crate::handlers::validation::dnsmx::DnsResolver;
use crate::handlers::validation::reachability::ReachabilityCache;
use crate::handlers::validation::syntax;

/// Which stage of the pipeline decided the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Empty,
    InvalidFormat,
    Disposable,
    Unreachable,
}

impl Verdict {
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }

    /// Stable machine-readable code, `None` for a valid address.
    pub fn code(self) -> Option<&'static str> {
        match self {
            Verdict::Valid => None,
            Verdict::Empty => Some("EMPTY_EMAIL"),
            Verdict::InvalidFormat => Some("INVALID_SYNTAX"),
            Verdict::Disposable => Some("DISPOSABLE_EMAIL"),
            Verdict::Unreachable => Some("INVALID_DOMAIN"),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Valid => "Email address is valid",
            Verdict::Empty => "Email address is empty",
            Verdict::InvalidFormat => "Email address has invalid syntax",
            Verdict::Disposable => {
                "The email address domain is a provider of disposable email addresses"
            }
            Verdict::Unreachable => "Email domain has no valid DNS records",
        }
    }
}

/// Validates email addresses for intake.
///
/// Cheap to clone: clones share the blocklist and the reachability cache.
///
/// # Example
/// ```no_run
/// use email_domain_validator::config::Config;
/// use email_domain_validator::validator::EmailValidator;
///
/// # fn example() -> email_domain_validator::error::Result<()> {
/// let validator = EmailValidator::from_config(&Config::default())?;
/// assert!(!validator.validate_email("test@mailinator.com"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EmailValidator {
    disposable: Arc<DisposableDomains>,
    reachability: Arc<ReachabilityCache>,
}

impl EmailValidator {
    pub fn new(disposable: Arc<DisposableDomains>, reachability: Arc<ReachabilityCache>) -> Self {
        Self {
            disposable,
            reachability,
        }
    }

    /// Loads the blocklist and sets up a DNS-backed reachability cache.
    ///
    /// # Errors
    /// Fails if a configured blocklist file cannot be read.
    pub fn from_config(config: &Config) -> Result<Self> {
        let disposable = DisposableDomains::from_source(config.disposable_domains_path.as_deref())?;
        let resolver = DnsResolver::from_system_conf(config.dns_timeout, config.dns_attempts);

        info!(
            disposable_domains = disposable.len(),
            dns_timeout_secs = config.dns_timeout.as_secs(),
            dns_attempts = config.dns_attempts,
            "Email validator ready"
        );

        Ok(Self::new(
            Arc::new(disposable),
            Arc::new(ReachabilityCache::new(Arc::new(resolver))),
        ))
    }

    pub fn is_valid_format(&self, email: &str) -> bool {
        syntax::is_valid_format(email)
    }

    pub fn is_disposable_email(&self, email: &str) -> bool {
        self.disposable.is_disposable_email(email)
    }

    /// Blocking reachability check for the address's domain.
    pub fn has_valid_mx_records(&self, email: &str) -> bool {
        self.reachability.has_valid_mx_records(email)
    }

    pub async fn has_valid_mx_records_async(&self, email: &str) -> bool {
        self.reachability.has_valid_mx_records_async(email).await
    }

    /// `true` only if the address passes every check.
    pub fn validate_email(&self, email: &str) -> bool {
        self.evaluate(email).is_valid()
    }

    pub async fn validate_email_async(&self, email: &str) -> bool {
        self.evaluate_async(email).await.is_valid()
    }

    /// Runs the pipeline and reports which stage decided, blocking on DNS.
    pub fn evaluate(&self, email: &str) -> Verdict {
        if let Some(rejected) = self.local_checks(email) {
            return rejected;
        }
        if self.has_valid_mx_records(email) {
            Verdict::Valid
        } else {
            Verdict::Unreachable
        }
    }

    pub async fn evaluate_async(&self, email: &str) -> Verdict {
        if let Some(rejected) = self.local_checks(email) {
            return rejected;
        }
        if self.has_valid_mx_records_async(email).await {
            Verdict::Valid
        } else {
            Verdict::Unreachable
        }
    }

    pub fn reachability(&self) -> &ReachabilityCache {
        &self.reachability
    }

    /// Checks that need no I/O.
    fn local_checks(&self, email: &str) -> Option<Verdict> {
        if email.trim().is_empty() {
            Some(Verdict::Empty)
        } else if !self.is_valid_format(email) {
            Some(Verdict::InvalidFormat)
        } else if self.is_disposable_email(email) {
            Some(Verdict::Disposable)
        } else {
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::validation::dnsmx::MockDomainResolver;

    fn validator_with(mock: MockDomainResolver) -> EmailValidator {
        EmailValidator::new(
            Arc::new(DisposableDomains::parse("mailinator.com\nyopmail.com\n")),
            Arc::new(ReachabilityCache::new(Arc::new(mock))),
        )
    }

    #[test]
    fn test_end_to_end_examples() {
        let validator = test_support::validator();

        assert!(validator.validate_email("test@example.com"));
        assert!(!validator.validate_email("test@mailinator.com"));
        assert!(!validator.validate_email("invalid-email"));
        assert!(!validator.validate_email(""));
    }

    #[test]
    fn test_verdict_for_each_stage() {
        let validator = test_support::validator();

        assert_eq!(validator.evaluate("test@example.com"), Verdict::Valid);
        assert_eq!(validator.evaluate("   "), Verdict::Empty);
        assert_eq!(validator.evaluate("invalid-email"), Verdict::InvalidFormat);
        assert_eq!(validator.evaluate("test@MAILINATOR.com"), Verdict::Disposable);
        assert_eq!(
            validator.evaluate("user@nonexistent.invalid"),
            Verdict::Unreachable
        );
    }

    #[test]
    fn test_short_circuits_before_dns() {
        let mut mock = MockDomainResolver::new();
        mock.expect_resolve_blocking().never();
        mock.expect_resolve().never();
        let validator = validator_with(mock);

        assert!(!validator.validate_email(""));
        assert!(!validator.validate_email("\t\n"));
        assert!(!validator.validate_email("invalid-email"));
        assert!(!validator.validate_email("user@example.c"));
        assert!(!validator.validate_email("test@mailinator.com"));
        assert!(!validator.validate_email("test@YopMail.com"));
        assert_eq!(validator.reachability().entry_count(), 0);
    }

    #[test]
    fn test_unreachable_domain_is_rejected() {
        let mut mock = MockDomainResolver::new();
        mock.expect_resolve_blocking()
            .times(1)
            .returning(|_| Ok(false));
        let validator = validator_with(mock);

        assert!(!validator.validate_email("someone@parked-domain.com"));
        assert!(!validator.has_valid_mx_records("other@parked-domain.com"));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut mock = MockDomainResolver::new();
        mock.expect_resolve_blocking()
            .times(1)
            .returning(|_| Ok(true));
        let validator = validator_with(mock);

        let first = validator.validate_email("repeat@example.com");
        for _ in 0..5 {
            assert_eq!(validator.validate_email("repeat@example.com"), first);
        }
        assert!(first);
    }

    #[test]
    fn test_clones_share_the_cache() {
        let mut mock = MockDomainResolver::new();
        mock.expect_resolve_blocking()
            .times(1)
            .returning(|_| Ok(true));
        let validator = validator_with(mock);
        let clone = validator.clone();

        assert!(validator.validate_email("a@example.com"));
        assert!(clone.validate_email("b@example.com"));
    }

    #[test]
    fn test_sub_checks_are_individually_callable() {
        let validator = test_support::validator();

        assert!(validator.is_valid_format("test@mailinator.com"));
        assert!(validator.is_disposable_email("test@mailinator.com"));
        assert!(validator.has_valid_mx_records("test@mailinator.com"));
        assert!(!validator.has_valid_mx_records("test@gone.invalid"));
    }

    #[tokio::test]
    async fn test_async_pipeline_matches_blocking_pipeline() {
        let blocking = test_support::validator();
        let suspending = test_support::validator();

        for email in [
            "test@example.com",
            "test@mailinator.com",
            "invalid-email",
            "",
            "user@nonexistent.invalid",
        ] {
            assert_eq!(
                blocking.evaluate(email),
                suspending.evaluate_async(email).await,
                "modes disagree for {:?}",
                email
            );
        }
    }

    #[tokio::test]
    async fn test_async_lookup_error_is_false_not_error() {
        let mut mock = MockDomainResolver::new();
        mock.expect_resolve().times(1).returning(|_| {
            Err(crate::error::LookupError::Task(
                "resolver unavailable".to_string(),
            ))
        });
        let validator = validator_with(mock);

        assert!(!validator.validate_email_async("user@example.com").await);
        assert!(!validator.has_valid_mx_records_async("user@example.com").await);
    }

    #[test]
    fn test_async_result_is_reused_by_blocking_check() {
        let validator = test_support::validator();
        let verdict = tokio_test::block_on(validator.evaluate_async("test@example.com"));
        assert_eq!(verdict, Verdict::Valid);
        assert!(validator.validate_email("test@example.com"));
    }

    #[test]
    fn test_verdict_codes_and_messages() {
        assert_eq!(Verdict::Valid.code(), None);
        assert_eq!(Verdict::InvalidFormat.code(), Some("INVALID_SYNTAX"));
        assert_eq!(Verdict::Unreachable.code(), Some("INVALID_DOMAIN"));
        assert_eq!(Verdict::Disposable.code(), Some("DISPOSABLE_EMAIL"));
        assert_eq!(Verdict::Empty.code(), Some("EMPTY_EMAIL"));
        assert_eq!(
            Verdict::Unreachable.message(),
            "Email domain has no valid DNS records"
        );
    }

    #[test]
    fn test_from_config_with_missing_blocklist_fails() {
        let config = Config {
            disposable_domains_path: Some("/no/such/blocklist.conf".into()),
            ..Config::default()
        };

        assert!(matches!(
            EmailValidator::from_config(&config),
            Err(crate::error::Error::DisposableList { .. })
        ));
    }
}
