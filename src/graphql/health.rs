use crate::models::health::HealthResponse;
use crate::validator::EmailValidator;
use async_graphql::{Context, Object, Result};

/// GraphQL representation of service health status
///
/// Mirrors the REST health response.
#[derive(Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub cached_domains: usize,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            timestamp: response.timestamp,
            cached_domains: response.cached_domains,
        }
    }
}

#[Object]
impl Health {
    /// Current service status indicator, "UP" while serving
    async fn status(&self) -> &str {
        &self.status
    }

    /// ISO-8601 timestamp of the check, in UTC
    async fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Number of domains in the reachability cache
    async fn cached_domains(&self) -> usize {
        self.cached_domains
    }
}

/// Root query type for health-related GraphQL operations
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    ///
    /// # Errors
    /// Fails only if the schema was built without an [`EmailValidator`].
    async fn health(&self, ctx: &Context<'_>) -> Result<Health> {
        let validator = ctx.data::<EmailValidator>()?;
        Ok(Health::from(HealthResponse::up(
            validator.reachability().entry_count(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::test_support;
    use async_graphql::{EmptyMutation, EmptySubscription, Schema};
    use chrono::{DateTime, Utc};

    fn health_schema(
        validator: Option<EmailValidator>,
    ) -> Schema<HealthQuery, EmptyMutation, EmptySubscription> {
        let builder = Schema::build(HealthQuery, EmptyMutation, EmptySubscription);
        match validator {
            Some(validator) => builder.data(validator).finish(),
            None => builder.finish(),
        }
    }

    #[test]
    fn test_health_from_health_response() {
        let timestamp = Utc::now().to_rfc3339();
        let health_response = HealthResponse {
            status: "UP".to_string(),
            timestamp: timestamp.clone(),
            cached_domains: 7,
        };

        let health = Health::from(health_response);

        assert_eq!(health.status, "UP");
        assert_eq!(health.timestamp, timestamp);
        assert_eq!(health.cached_domains, 7);
    }

    #[tokio::test]
    async fn test_health_query_resolver() {
        let schema = health_schema(Some(test_support::validator()));

        let query = r#"
            query {
                health {
                    status
                    timestamp
                    cachedDomains
                }
            }
        "#;

        let result = schema.execute(query).await;
        assert!(result.errors.is_empty());

        let data = result.data.into_json().unwrap();
        assert_eq!(data["health"]["status"], "UP");
        assert_eq!(data["health"]["cachedDomains"], 0);

        let timestamp = data["health"]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_health_counts_cached_domains() {
        let validator = test_support::validator();
        validator.validate_email_async("a@example.com").await;
        validator.validate_email_async("b@example.org").await;
        validator.validate_email_async("c@example.org").await;

        let result = health_schema(Some(validator))
            .execute("{ health { cachedDomains } }")
            .await;

        assert!(result.errors.is_empty());
        assert_eq!(result.data.into_json().unwrap()["health"]["cachedDomains"], 2);
    }

    #[tokio::test]
    async fn test_health_without_validator_is_an_error() {
        let result = health_schema(None).execute("{ health { status } }").await;

        assert_eq!(result.errors.len(), 1);
    }
}
