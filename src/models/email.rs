use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validator::Verdict;

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct BulkEmailRequest {
    pub emails: Vec<String>,
}

/// Why an address was rejected.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct EmailValidationError {
    /// One of EMPTY_EMAIL, INVALID_SYNTAX, DISPOSABLE_EMAIL, INVALID_DOMAIN
    pub code: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct EmailValidationResponse {
    pub is_valid: bool,
    /// "VALID" when the address passed, otherwise absent
    pub status: Option<String>,
    pub error: Option<EmailValidationError>,
}

impl From<Verdict> for EmailValidationResponse {
    fn from(verdict: Verdict) -> Self {
        match verdict.code() {
            None => Self {
                is_valid: true,
                status: Some("VALID".to_string()),
                error: None,
            },
            Some(code) => Self {
                is_valid: false,
                status: None,
                error: Some(EmailValidationError {
                    code: code.to_string(),
                    message: verdict.message().to_string(),
                }),
            },
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct BulkEmailValidationResult {
    pub email: String,
    pub validation: EmailValidationResponse,
}

#[derive(Serialize, ToSchema)]
pub struct BulkEmailValidationResponse {
    pub results: Vec<BulkEmailValidationResult>,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl FromIterator<(String, Verdict)> for BulkEmailValidationResponse {
    fn from_iter<I: IntoIterator<Item = (String, Verdict)>>(iter: I) -> Self {
        let results: Vec<BulkEmailValidationResult> = iter
            .into_iter()
            .map(|(email, verdict)| BulkEmailValidationResult {
                email,
                validation: verdict.into(),
            })
            .collect();
        let valid_count = results.iter().filter(|r| r.validation.is_valid).count();

        Self {
            invalid_count: results.len() - valid_count,
            valid_count,
            results,
        }
    }
}
