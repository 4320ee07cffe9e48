use serde::{Deserialize, Serialize};

/// Query parameters accepted by the GET greeting endpoint
#[derive(Debug, Deserialize)]
pub struct GreetingParams {
    pub name: Option<String>,
}

/// JSON body required by the POST greeting endpoint
#[derive(Debug, Deserialize)]
pub struct SayHelloRequest {
    pub name: String,
}

/// Greeting returned by both greeting endpoints
#[derive(Debug, Clone, Serialize)]
pub struct GreetingPayload {
    pub greeting: String,
    pub timestamp: String,
    pub from: String,
}
