//! hello-api: a minimal HTTP JSON API
//!
//! Four endpoints under `/api/v1`: a greeting endpoint in GET and POST
//! variants, a mock user lookup, and a health check. Every response is
//! wrapped in the uniform `{code, message, data}` envelope.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod response;
pub mod server;
pub mod versioning;

pub use config::Config;
pub use error::{Error, Result};

use std::sync::Arc;

use axum::Router;

use crate::versioning::{ApiVersion, EndpointDoc, VersionedApiBuilder};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    /// Endpoint catalog recorded when the routes were registered.
    pub endpoints: Arc<Vec<EndpointDoc>>,
}

/// Build the application router and the endpoint catalog.
///
/// The catalog comes straight from the route registrations, so the health
/// endpoint and the startup banner always describe the real route table.
pub fn app(config: &Config) -> (Router, Arc<Vec<EndpointDoc>>) {
    let (api, endpoints) = VersionedApiBuilder::new()
        .with_base_path("/api")
        .add_version(ApiVersion::V1, |routes| {
            routes
                .get("/hello", Some("?name=YourName"), handlers::say_hello_get)
                .post(
                    "/hello",
                    Some(r#" (JSON: {"name": "YourName"})"#),
                    handlers::say_hello_post,
                )
                .get("/user/{id}", None, handlers::get_user)
                .get("/health", None, handlers::health)
        })
        .build_routes()
        .into_parts();

    let endpoints = Arc::new(endpoints);

    let state = AppState {
        service_name: config.service.name.clone(),
        endpoints: endpoints.clone(),
    };

    (api.with_state(state), endpoints)
}
