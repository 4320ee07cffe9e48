//! Greeting endpoints (GET and POST variants)

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::error::Result;
use crate::models::{local_timestamp, GreetingParams, GreetingPayload, SayHelloRequest};
use crate::response::ApiResponse;
use crate::AppState;

/// Greeting target when the query parameter is absent.
const DEFAULT_NAME: &str = "World";

/// GET greeting
///
/// Accepts any `name` value, including the empty string; only an absent
/// parameter falls back to the default.
pub async fn say_hello_get(
    State(state): State<AppState>,
    Query(params): Query<GreetingParams>,
) -> ApiResponse<GreetingPayload> {
    let name = params.name.unwrap_or_else(|| DEFAULT_NAME.to_string());

    tracing::debug!(%name, "greeting requested");

    ApiResponse::success(GreetingPayload {
        greeting: format!("Hello, {}! 👋", name),
        timestamp: local_timestamp(),
        from: state.service_name.clone(),
    })
}

/// POST greeting
///
/// The body must bind to `SayHelloRequest`; any rejection (empty body, bad
/// JSON, missing `name`) surfaces as a 400 envelope with the parser text.
pub async fn say_hello_post(
    State(state): State<AppState>,
    body: Result<Json<SayHelloRequest>, JsonRejection>,
) -> Result<ApiResponse<GreetingPayload>> {
    let Json(request) = body?;

    tracing::debug!(name = %request.name, "greeting posted");

    Ok(ApiResponse::success(GreetingPayload {
        greeting: format!("Hello, {}! 🎉", request.name),
        timestamp: local_timestamp(),
        from: format!("{} (POST)", state.service_name),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn state() -> State<AppState> {
        State(AppState {
            service_name: "hello-api".to_string(),
            endpoints: Arc::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn get_defaults_to_world() {
        let response = say_hello_get(state(), Query(GreetingParams { name: None })).await;
        let payload = response.data.unwrap();
        assert_eq!(payload.greeting, "Hello, World! 👋");
        assert_eq!(payload.from, "hello-api");
    }

    #[tokio::test]
    async fn get_keeps_empty_name() {
        let params = GreetingParams {
            name: Some(String::new()),
        };
        let response = say_hello_get(state(), Query(params)).await;
        assert_eq!(response.data.unwrap().greeting, "Hello, ! 👋");
    }

    #[tokio::test]
    async fn post_labels_its_code_path() {
        let body = Ok(Json(SayHelloRequest {
            name: "Ada".to_string(),
        }));
        let response = say_hello_post(state(), body).await.unwrap();
        let payload = response.data.unwrap();
        assert_eq!(payload.greeting, "Hello, Ada! 🎉");
        assert_eq!(payload.from, "hello-api (POST)");
    }
}
