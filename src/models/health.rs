use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload for the health endpoints.
///
/// ## Fields
/// - `status`: "UP" while the service is serving
/// - `timestamp`: RFC 3339 timestamp of the check
/// - `cached_domains`: number of entries in the domain reachability cache
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "cached_domains": 42
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub cached_domains: usize,
}

impl HealthResponse {
    pub fn up(cached_domains: usize) -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            cached_domains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_health_response_up() {
        let response = HealthResponse::up(3);

        assert_eq!(response.status, "UP");
        assert_eq!(response.cached_domains, 3);

        let parsed_time = DateTime::parse_from_rfc3339(&response.timestamp);
        assert!(
            parsed_time.is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let json = serde_json::to_value(HealthResponse::up(0)).expect("Should serialize to JSON");

        assert_eq!(json["status"], "UP");
        assert_eq!(json["cached_domains"], 0);
        assert!(json["timestamp"].is_string());
    }
}
