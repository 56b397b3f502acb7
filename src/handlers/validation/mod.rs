/// Checks an email address against the intake pattern
/// `local-part@domain.tld`.
///
/// # Examples
/// ```
/// use email_domain_validator::handlers::validation::syntax::is_valid_format;
///
/// assert!(is_valid_format("user.name+tag@example.com"));
/// assert!(!is_valid_format("invalid@ex_mple.com"));
/// ```
pub mod syntax;

/// Immutable blocklist of disposable email domains, loaded once at startup
/// from the embedded list or a configured file.
pub mod disposable;

/// Resolves a domain's mail infrastructure over DNS:
/// 1. Checks for MX (Mail Exchange) records first
/// 2. Falls back to A/AAAA records if MX records are not found
pub mod dnsmx;

/// Memoizes domain reachability with a one hour time-to-live.
pub mod reachability;

/// Extracts the domain of an email address: everything after the last `@`.
///
/// Returns `None` when there is no `@` or nothing follows it.
pub fn domain_of(email: &str) -> Option<&str> {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .filter(|domain| !domain.is_empty())
}
