use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use chrono::{DateTime, Utc};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::domain::ObservanceCalendar;
use crate::services::prayer_cache::CacheMaintenance;
use crate::utils::datetime::local_now;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub observance: ObservanceHealth,
    pub cache: CacheHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ObservanceHealth {
    pub start_date: String,
    pub day_index: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheHealth {
    pub enabled: bool,
    pub entries: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub calendar: ObservanceCalendar,
    pub cache: Option<Arc<dyn CacheMaintenance>>,
    pub start_time: DateTime<Utc>,
}

/// Axum server for the health endpoints.
pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(calendar: ObservanceCalendar, cache: Option<Arc<dyn CacheMaintenance>>) -> Self {
        let state = AppState {
            calendar,
            cache,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    let cache = CacheHealth {
        enabled: state.cache.is_some(),
        entries: state.cache.as_ref().map_or(0, |c| c.entry_count()),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        observance: ObservanceHealth {
            start_date: state.calendar.start_date().to_string(),
            day_index: state.calendar.day_index(local_now().date()),
        },
        cache,
        uptime_seconds: uptime,
    })
}

async fn readiness_check() -> Json<&'static str> {
    // No backing store: the dispatcher is ready as soon as the router is served
    Json("ready")
}

async fn liveness_check() -> Json<&'static str> {
    // Simple liveness check - if this endpoint responds, the service is alive
    Json("alive")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::NaiveDate;

    fn create_test_health_service() -> HealthService {
        let start = NaiveDate::from_ymd_opt(2026, 2, 18).expect("valid date");
        HealthService::new(ObservanceCalendar::new(start), None)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = TestServer::new(create_test_health_service().router).expect("Failed to create test server");

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(health_response.observance.start_date, "2026-02-18");
        assert!(!health_response.cache.enabled);
        assert_eq!(health_response.cache.entries, 0);
    }

    #[tokio::test]
    async fn test_readiness_endpoint() {
        let server = TestServer::new(create_test_health_service().router).expect("Failed to create test server");

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let ready_response: String = response.json();
        assert_eq!(ready_response, "ready");
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let server = TestServer::new(create_test_health_service().router).expect("Failed to create test server");

        let response = server.get("/health/live").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let alive_response: String = response.json();
        assert_eq!(alive_response, "alive");
    }
}
