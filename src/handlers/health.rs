//! Health check endpoint

use axum::extract::State;
use serde::Serialize;

use crate::models::local_timestamp;
use crate::response::ApiResponse;
use crate::versioning::EndpointDoc;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: String,
    version: String,
    timestamp: String,
    uptime: String,
    endpoints: Vec<String>,
}

/// Health check
///
/// The endpoint list is rendered from the catalog recorded at route
/// registration time, so it always matches the real route table.
pub async fn health(State(state): State<AppState>) -> ApiResponse<HealthStatus> {
    ApiResponse::success(HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: local_timestamp(),
        uptime: "running".to_string(),
        endpoints: state.endpoints.iter().map(EndpointDoc::render).collect(),
    })
    .with_message("API server is running")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app, Config};

    #[tokio::test]
    async fn health_reports_registered_endpoints() {
        let config = Config::default();
        let (_, endpoints) = app(&config);

        let state = AppState {
            service_name: config.service.name.clone(),
            endpoints,
        };

        let response = health(State(state)).await;
        let data = response.data.unwrap();

        assert_eq!(data.status, "healthy");
        assert_eq!(data.version, "1.0.0");
        assert_eq!(data.uptime, "running");
        assert_eq!(data.endpoints.len(), 4);
        assert!(data.endpoints[0].starts_with("GET  /api/v1/hello"));
    }
}
