use super::email::EmailQuery;
use super::health::HealthQuery;
use crate::validator::EmailValidator;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query combining health and email validation operations.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, EmailQuery);

/// Main GraphQL Schema Definition
///
/// Queries only; there are no mutations or subscriptions.
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Creates the GraphQL schema.
///
/// The validator is attached as schema data, so resolvers share the REST
/// endpoints' blocklist and reachability cache when given a clone of the
/// same validator.
///
/// # Example
///
/// ```rust,no_run
/// use email_domain_validator::config::Config;
/// use email_domain_validator::graphql::schema::create_schema;
/// use email_domain_validator::validator::EmailValidator;
///
/// # fn example() -> email_domain_validator::error::Result<()> {
/// let validator = EmailValidator::from_config(&Config::default())?;
/// let schema = create_schema(validator);
/// # Ok(())
/// # }
/// ```
pub fn create_schema(validator: EmailValidator) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(validator)
        .finish()
}
