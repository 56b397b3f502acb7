use actix_web::{App, HttpServer, web::Data};
use email_domain_validator::config::Config;
use email_domain_validator::graphql::schema::create_schema;
use email_domain_validator::openapi::ApiDoc;
use email_domain_validator::telemetry::setup_logging;
use email_domain_validator::validator::EmailValidator;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Domain Validator Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - REST validation endpoints under `/api/v1`
/// - GraphQL endpoint powered by Async-GraphQL
/// - Swagger UI for API documentation
///
/// # Endpoints
/// - REST: `/api/v1/health`, `/api/v1/validate-email`, `/api/v1/validate-emails-bulk`
/// - GraphQL: `/api/v1/graphql`, playground at `/api/v1/playground`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// Environment variables, optionally from a `.env` file. See
/// [`Config::from_env`] for the recognised keys.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    setup_logging();

    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        std::io::Error::other(e)
    })?;

    // One validator for every worker, so the reachability cache is shared.
    let validator = EmailValidator::from_config(&config).map_err(|e| {
        error!(error = %e, "Failed to initialise email validator");
        std::io::Error::other(e)
    })?;

    let schema = create_schema(validator.clone());
    let validator = Data::new(validator);

    info!(host = %config.host, port = config.port, "Starting HTTP server");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(openapi.clone()))
            .app_data(Data::new(schema.clone()))
            .app_data(validator.clone())
            .configure(email_domain_validator::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
