//! GraphQL interface over the same validator the REST endpoints use.

pub mod email;
pub mod handlers;
pub mod health;
pub mod schema;
