use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::domain_of;
use crate::error::{Error, Result};

/// Blocklist compiled into the binary, used when no file is configured.
const EMBEDDED_BLOCKLIST: &str =
    include_str!("../../../resources/disposable_email_blocklist.conf");

/// Immutable set of disposable (throwaway) email domains.
///
/// Built once at startup and shared read-only by every validation call.
/// Domains are stored lowercase and looked up case-insensitively.
///
/// # Example
/// ```
/// use email_domain_validator::handlers::validation::disposable::DisposableDomains;
///
/// let domains = DisposableDomains::parse("// throwaway providers\nmailinator.com\n");
/// assert!(domains.is_disposable_email("someone@MAILINATOR.com"));
/// assert!(!domains.is_disposable_email("someone@example.com"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DisposableDomains {
    domains: HashSet<String>,
}

impl DisposableDomains {
    /// Parses a newline-delimited blocklist.
    ///
    /// Blank lines and lines starting with `//` (after optional leading
    /// whitespace) are skipped; every other line is one domain.
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .collect()
    }

    /// The blocklist shipped inside the binary.
    pub fn embedded() -> Self {
        let domains = Self::parse(EMBEDDED_BLOCKLIST);
        info!(count = domains.len(), "Loaded embedded disposable domain list");
        domains
    }

    /// Reads the blocklist from a file. A missing or unreadable file is a
    /// startup error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::DisposableList {
            path: path.to_path_buf(),
            source,
        })?;

        let domains = Self::parse(&content);
        info!(
            count = domains.len(),
            path = %path.display(),
            "Loaded disposable domain list"
        );
        Ok(domains)
    }

    /// Loads from `path` when given, otherwise falls back to the embedded list.
    pub fn from_source(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::embedded()),
        }
    }

    /// Checks whether a bare domain is on the blocklist.
    pub fn contains_domain(&self, domain: &str) -> bool {
        let normalized = domain.trim().trim_end_matches('.').to_lowercase();
        self.domains.contains(&normalized)
    }

    /// Checks whether an email address uses a disposable domain.
    ///
    /// The address is expected to have passed format validation already; an
    /// address without `@` is never reported as disposable.
    ///
    /// # Returns
    /// * `true` if the domain is on the blocklist and the address should be rejected
    /// * `false` otherwise
    pub fn is_disposable_email(&self, email: &str) -> bool {
        let disposable = domain_of(email).is_some_and(|domain| self.contains_domain(domain));
        if disposable {
            debug!(email, "Address uses a disposable domain");
        }
        disposable
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for DisposableDomains {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            domains: iter
                .into_iter()
                .map(|domain| domain.as_ref().trim().to_lowercase())
                .filter(|domain| !domain.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let list = "// disposable providers\n\nmailinator.com\n   // indented comment\n  yopmail.com  \r\n\n";
        let domains = DisposableDomains::parse(list);

        assert_eq!(domains.len(), 2);
        assert!(domains.contains_domain("mailinator.com"));
        assert!(domains.contains_domain("yopmail.com"));
        assert!(!domains.contains_domain("// disposable providers"));
    }

    #[test]
    fn test_disposable_email_is_case_insensitive() {
        let domains = DisposableDomains::parse("Mailinator.COM\n");

        assert!(domains.is_disposable_email("test@mailinator.com"));
        assert!(domains.is_disposable_email("test@MAILINATOR.COM"));
        assert!(domains.is_disposable_email("test@MaIlInAtOr.CoM"));
    }

    #[test]
    fn test_non_disposable_email() {
        let domains = DisposableDomains::parse("mailinator.com\n");

        assert!(!domains.is_disposable_email("johndoe@gmail.com"));
        assert!(!domains.is_disposable_email("test@sub.mailinator.com"));
    }

    #[test]
    fn test_domain_is_taken_after_last_at() {
        let domains = DisposableDomains::parse("mailinator.com\n");

        assert!(domains.is_disposable_email("a@b@mailinator.com"));
        assert!(!domains.is_disposable_email("a@mailinator.com@example.com"));
    }

    #[test]
    fn test_address_without_domain_is_not_disposable() {
        let domains = DisposableDomains::parse("mailinator.com\n");

        assert!(!domains.is_disposable_email("mailinator.com"));
        assert!(!domains.is_disposable_email("user@"));
        assert!(!domains.is_disposable_email(""));
    }

    #[test]
    fn test_every_embedded_domain_is_disposable_in_any_case() {
        let domains = DisposableDomains::embedded();
        assert!(!domains.is_empty());

        for line in EMBEDDED_BLOCKLIST.lines().map(str::trim) {
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            assert!(domains.is_disposable_email(&format!("user@{}", line)));
            assert!(domains.is_disposable_email(&format!("user@{}", line.to_uppercase())));
        }
    }

    #[test]
    fn test_embedded_list_knows_common_providers() {
        let domains = DisposableDomains::embedded();

        assert!(domains.contains_domain("mailinator.com"));
        assert!(domains.contains_domain("guerrillamail.com"));
        assert!(!domains.contains_domain("example.com"));
        assert!(!domains.contains_domain("gmail.com"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "disposable-domains-{}.conf",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "// local overrides").unwrap();
            writeln!(file, "throwaway.test").unwrap();
        }

        let domains = DisposableDomains::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(domains.len(), 1);
        assert!(domains.is_disposable_email("user@THROWAWAY.test"));
    }

    #[test]
    fn test_missing_file_is_a_startup_error() {
        let result = DisposableDomains::load("/definitely/not/here/blocklist.conf");

        match result {
            Err(Error::DisposableList { path, source }) => {
                assert_eq!(path, Path::new("/definitely/not/here/blocklist.conf"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected DisposableList error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_source_defaults_to_embedded() {
        let domains = DisposableDomains::from_source(None).unwrap();
        assert_eq!(domains.len(), DisposableDomains::embedded().len());
    }
}
