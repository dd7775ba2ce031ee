//! HTTP surface of the service: route assembly, request handlers, and the
//! API error type.

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::locator::TimezoneLocator;

/// Shared read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub locator: Arc<dyn TimezoneLocator>,
}

/// Bundles the configured router for serving or testing.
pub struct ApiService {
    pub router: Router,
}

impl ApiService {
    pub fn new(locator: Arc<dyn TimezoneLocator>) -> Self {
        let state = AppState { locator };

        let router = Router::new()
            .route("/health", get(handlers::health))
            .route("/timezone", get(handlers::current_timezone))
            .route("/timezone/offset", get(handlers::offset_for_date))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono_tz::Tz;
    use serde_json::{json, Value};

    /// Locator returning a fixed answer regardless of the coordinate.
    struct StaticLocator(Option<Tz>);

    impl TimezoneLocator for StaticLocator {
        fn locate(&self, _lat: f64, _lon: f64) -> Option<Tz> {
            self.0
        }
    }

    fn test_server(zone: Option<Tz>) -> TestServer {
        let service = ApiService::new(Arc::new(StaticLocator(zone)));
        TestServer::new(service.router).expect("Failed to create test server")
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = test_server(None);

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_current_timezone_resolved() {
        let server = test_server(Some(Tz::America__New_York));

        let response = server
            .get("/timezone")
            .add_query_param("lat", 40.7128)
            .add_query_param("lon", -74.0060)
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["timezone"], "America/New_York");
        let offset = body["utc_offset"].as_str().expect("utc_offset should be a string");
        assert!(offset.starts_with('+') || offset.starts_with('-'));
        assert!(offset[1..].parse::<f64>().is_ok());
    }

    #[tokio::test]
    async fn test_current_timezone_lookup_miss() {
        let server = test_server(None);

        let response = server
            .get("/timezone")
            .add_query_param("lat", 0.0)
            .add_query_param("lon", 0.0)
            .await;

        // Lookup misses keep the permissive 200 contract
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>(), json!({ "error": "Timezone not found" }));
    }

    #[tokio::test]
    async fn test_offset_for_standard_time_date() {
        let server = test_server(Some(Tz::America__New_York));

        let response = server
            .get("/timezone/offset")
            .add_query_param("lat", 40.7128)
            .add_query_param("lon", -74.0060)
            .add_query_param("date", "2024-01-15")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({
                "timezone": "America/New_York",
                "date": "2024-01-15",
                "utc_offset": "-5.0"
            })
        );
    }

    #[tokio::test]
    async fn test_offset_for_daylight_saving_date() {
        let server = test_server(Some(Tz::America__New_York));

        let response = server
            .get("/timezone/offset")
            .add_query_param("lat", 40.7128)
            .add_query_param("lon", -74.0060)
            .add_query_param("date", "2024-07-15")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["utc_offset"], "-4.0");
    }

    #[tokio::test]
    async fn test_offset_invalid_date_format() {
        let server = test_server(Some(Tz::America__New_York));

        let response = server
            .get("/timezone/offset")
            .add_query_param("lat", 40.7128)
            .add_query_param("lon", -74.0060)
            .add_query_param("date", "2024-13-40")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Invalid date format. Use YYYY-MM-DD." })
        );
    }

    #[tokio::test]
    async fn test_invalid_date_reported_before_lookup_miss() {
        let server = test_server(None);

        let response = server
            .get("/timezone/offset")
            .add_query_param("lat", 0.0)
            .add_query_param("lon", 0.0)
            .add_query_param("date", "not-a-date")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Invalid date format. Use YYYY-MM-DD." })
        );
    }

    #[tokio::test]
    async fn test_latitude_out_of_range() {
        let server = test_server(Some(Tz::America__New_York));

        let response = server
            .get("/timezone")
            .add_query_param("lat", 91.0)
            .add_query_param("lon", 0.0)
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_longitude_out_of_range_on_offset_endpoint() {
        let server = test_server(Some(Tz::America__New_York));

        let response = server
            .get("/timezone/offset")
            .add_query_param("lat", 0.0)
            .add_query_param("lon", 200.0)
            .add_query_param("date", "2024-01-15")
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
