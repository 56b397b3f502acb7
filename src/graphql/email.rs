use crate::validator::{EmailValidator, Verdict};
use async_graphql::{Context, Object, Result, SimpleObject};
use futures::future::join_all;

/// Represents the possible validation errors for an email address
///
/// - `EMPTY_EMAIL`: Nothing but whitespace was submitted
/// - `INVALID_SYNTAX`: The address does not match `local@domain.tld`
/// - `DISPOSABLE_EMAIL`: The email comes from a disposable email provider
/// - `INVALID_DOMAIN`: The domain has no MX, A or AAAA records
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct EmailValidationError {
    /// Error code: EMPTY_EMAIL, INVALID_SYNTAX, DISPOSABLE_EMAIL or INVALID_DOMAIN
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Response object for email validation containing either valid status or error details
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct EmailValidationResponse {
    /// Whether the email is valid
    pub is_valid: bool,
    /// If valid, contains "VALID", otherwise null
    pub status: Option<String>,
    /// Error information if validation failed, otherwise null
    pub error: Option<EmailValidationError>,
}

impl From<Verdict> for EmailValidationResponse {
    fn from(verdict: Verdict) -> Self {
        Self {
            is_valid: verdict.is_valid(),
            status: verdict.is_valid().then(|| "VALID".to_string()),
            error: verdict.code().map(|code| EmailValidationError {
                code: code.to_string(),
                message: verdict.message().to_string(),
            }),
        }
    }
}

/// Result for a single email in the bulk validation response
#[derive(SimpleObject)]
pub struct BulkEmailValidationResult {
    /// The email address that was validated, as submitted
    pub email: String,
    /// The validation result
    pub validation: EmailValidationResponse,
}

/// Response object for bulk email validation
#[derive(SimpleObject)]
pub struct BulkEmailValidationResponse {
    /// Results for each email in the input array, in input order
    pub results: Vec<BulkEmailValidationResult>,
    /// Count of valid emails in the batch
    pub valid_count: i32,
    /// Count of invalid emails in the batch
    pub invalid_count: i32,
}

/// Email validation query operations
#[derive(Default)]
pub struct EmailQuery;

#[Object]
impl EmailQuery {
    /// Validates one address. Surrounding whitespace is ignored.
    async fn validate_email(
        &self,
        ctx: &Context<'_>,
        email: String,
    ) -> Result<EmailValidationResponse> {
        let validator = ctx.data::<EmailValidator>()?;
        Ok(validator.evaluate_async(email.trim()).await.into())
    }

    /// Validates every address concurrently.
    async fn validate_emails_bulk(
        &self,
        ctx: &Context<'_>,
        emails: Vec<String>,
    ) -> Result<BulkEmailValidationResponse> {
        let validator = ctx.data::<EmailValidator>()?;

        let validation_futures = emails
            .into_iter()
            .map(|email| async move {
                let validation = validator.evaluate_async(email.trim()).await.into();
                BulkEmailValidationResult { email, validation }
            })
            .collect::<Vec<_>>();

        let results = join_all(validation_futures).await;
        let valid_count = results.iter().filter(|r| r.validation.is_valid).count() as i32;

        Ok(BulkEmailValidationResponse {
            invalid_count: results.len() as i32 - valid_count,
            valid_count,
            results,
        })
    }
}
