use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa` annotations on the REST
/// handlers and models.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Email Validation: `POST /api/v1/validate-email`
/// - Bulk Email Validation: `POST /api/v1/validate-emails-bulk`
///
/// The GraphQL interface at `/api/v1/graphql` is described by its own schema
/// and is only tagged here.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
        crate::routes::email::validate_emails_bulk,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::EmailRequest,
            crate::models::email::BulkEmailRequest,
            crate::models::email::EmailValidationError,
            crate::models::email::EmailValidationResponse,
            crate::models::email::BulkEmailValidationResult,
            crate::models::email::BulkEmailValidationResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email address validation endpoints"),
        (name = "GraphQL", description = "GraphQL API for interacting with all service features")
    ),
    info(
        description = "Validates email addresses at intake: format, disposable domains and domain reachability",
        title = "Email Domain Validator API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
