/// Checks that an email address has the shape `local-part@domain.tld`.
///
/// The accepted shape is deliberately narrow:
/// - local-part: one or more of `A-Z a-z 0-9 . _ % + -`
/// - domain: one or more of `A-Z a-z 0-9 . -`, followed by a final `.`
/// - top-level label: at least two ASCII letters, letters only
///
/// Exactly one `@` can appear, since neither character class admits it.
///
/// # Examples
/// ```
/// use email_domain_validator::handlers::validation::syntax::is_valid_format;
///
/// assert!(is_valid_format("user.name+tag@example.com"));
/// assert!(!is_valid_format("invalid-email"));
/// assert!(!is_valid_format("user@example.c"));
/// ```
///
/// # Arguments
/// * `email` - A string slice containing the email address to check
///
/// # Returns
/// `true` if the address matches the pattern, `false` otherwise
pub fn is_valid_format(email: &str) -> bool {
    let (local_part, domain_part) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    is_valid_local_part(local_part) && is_valid_domain_part(domain_part)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
}

/// The top-level label cannot contain a dot, so the split is always at the
/// last one.
fn is_valid_domain_part(domain: &str) -> bool {
    let (labels, tld) = match domain.rsplit_once('.') {
        Some(parts) => parts,
        None => return false,
    };

    !labels.is_empty()
        && labels
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}
