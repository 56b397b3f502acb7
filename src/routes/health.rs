use crate::models::health::HealthResponse;
use crate::validator::EmailValidator;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the service status, a timestamp, and the size of the domain
/// reachability cache.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("UP"), `timestamp` (ISO 8601) and `cached_domains`
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "cached_domains": 12
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(validator: web::Data<EmailValidator>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up(validator.reachability().entry_count()))
}

/// Registers the health endpoint.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
