use crate::models::email::{BulkEmailRequest, BulkEmailValidationResponse, EmailRequest};
use crate::validator::{EmailValidator, Verdict};
use actix_web::{HttpResponse, Responder, post, web};
use futures::future::join_all;
use serde_json::json;
use tracing::debug;

/// # Email Validation Endpoint
///
/// Validates an email address by checking, in order:
/// 1. Address format
/// 2. Disposable email domain blocklist
/// 3. Domain MX (or A/AAAA) records, cached for one hour
///
/// Surrounding whitespace in the submitted address is ignored.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field
///
/// ## Responses
/// - **200 OK**: Email is valid
/// - **400 Bad Request**:
///   - Empty address
///   - Invalid email syntax
///   - Disposable email detected
///   - Domain has no valid MX/A/AAAA records
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Email is valid"),
        (status = 400, description = "Invalid email")
    ),
    tag = "Email Validation"
)]
#[post("/validate-email")]
pub async fn validate_email(
    req: web::Json<EmailRequest>,
    validator: web::Data<EmailValidator>,
) -> impl Responder {
    let email = req.email.trim();
    let verdict = validator.evaluate_async(email).await;
    debug!(email, ?verdict, "Validated email");

    match verdict.code() {
        None => HttpResponse::Ok().json(json!({
            "status": "VALID",
            "message": verdict.message()
        })),
        Some(code) => HttpResponse::BadRequest().json(json!({
            "error": code,
            "message": verdict.message()
        })),
    }
}

/// Validates one address for a bulk request.
pub async fn validate_single_email(email: &str, validator: &EmailValidator) -> Verdict {
    validator.evaluate_async(email.trim()).await
}

/// # Bulk Email Validation Endpoint
///
/// Validates multiple email addresses concurrently with the same checks as
/// `/validate-email`. Addresses sharing a domain share its cached DNS result.
///
/// ## Responses
/// - **200 OK**: Returns validation results for all emails with counts
///
/// ## Example Request
/// ```json
/// { "emails": ["user1@example.com", "user2@example.com"] }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-emails-bulk",
    request_body = BulkEmailRequest,
    responses(
        (status = 200, description = "Bulk validation results", body = BulkEmailValidationResponse)
    ),
    tag = "Email Validation"
)]
#[post("/validate-emails-bulk")]
pub async fn validate_emails_bulk(
    req: web::Json<BulkEmailRequest>,
    validator: web::Data<EmailValidator>,
) -> impl Responder {
    let validation_futures = req
        .emails
        .iter()
        .map(|email| {
            let validator = validator.get_ref();
            async move {
                let verdict = validate_single_email(email, validator).await;
                (email.clone(), verdict)
            }
        })
        .collect::<Vec<_>>();

    let response: BulkEmailValidationResponse =
        join_all(validation_futures).await.into_iter().collect();
    debug!(
        valid = response.valid_count,
        invalid = response.invalid_count,
        "Validated email batch"
    );

    HttpResponse::Ok().json(response)
}

/// Configures email validation routes under /api/v1
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email).service(validate_emails_bulk);
}
