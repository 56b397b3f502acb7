use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp
/// and the number of cached domain lookups.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "cached_domains": 0
/// }
/// ```
pub mod health;

/// # Email Validation Endpoints
///
/// Single and bulk validation of email addresses. Each address is checked
/// for format, then against the disposable domain blocklist, then for a
/// reachable mail domain.
pub mod email;

/// GraphQL endpoint and playground.
pub mod graphql;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## Mounted Services
/// - Health check endpoints (see [`health::configure_routes`] for details)
/// - Email validation endpoints (see [`email::configure_routes`] for details)
/// - GraphQL endpoints (see [`graphql::configure_routes`] for details)
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/v1/health               - Service health status
/// POST /api/v1/validate-email       - Single email validation
/// POST /api/v1/validate-emails-bulk - Bulk email validation
/// POST /api/v1/graphql              - GraphQL queries
/// GET  /api/v1/playground           - GraphQL playground
/// ```
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`email::configure_routes`]: crate::routes::email::configure_routes
/// [`graphql::configure_routes`]: crate::routes::graphql::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes)
            .configure(graphql::configure_routes),
    );
}
