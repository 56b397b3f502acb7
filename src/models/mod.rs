/// Service liveness payload, shared by the REST and GraphQL health checks.
pub mod health;

/// Request and response bodies of the email validation endpoints.
pub mod email;
