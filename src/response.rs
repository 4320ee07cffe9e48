//! The uniform response envelope
//!
//! Every endpoint wraps its payload in `{code, message, data}`. `code`
//! mirrors the HTTP status, `message` is a human-readable status string, and
//! `data` is the endpoint-specific payload (`null` on errors).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Response envelope used by every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 envelope with the default success message
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Replace the envelope message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl ApiResponse<()> {
    /// Error envelope: mirrors the failure status and carries a null `data`
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let response = ApiResponse::success(42u32);
        assert_eq!(response.code, 200);
        assert_eq!(response.message, "success");
        assert_eq!(response.data, Some(42));
    }

    #[test]
    fn with_message_overrides_default() {
        let response = ApiResponse::success(1u8).with_message("user retrieved successfully");
        assert_eq!(response.message, "user retrieved successfully");
    }

    #[test]
    fn error_envelope_serializes_null_data() {
        let response = ApiResponse::error(StatusCode::BAD_REQUEST, "nope");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["code"], 400);
        assert_eq!(value["message"], "nope");
        assert!(value["data"].is_null());
    }

    #[test]
    fn status_code_follows_envelope_code() {
        let ok = ApiResponse::success("hi").into_response();
        assert_eq!(ok.status(), StatusCode::OK);

        let bad = ApiResponse::error(StatusCode::BAD_REQUEST, "nope").into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    }
}
