/// Validation checks for email addresses: format, disposable domain, and
/// domain reachability.
pub mod validation;
