//! Rejection response.
//!
//! # Design Decisions
//! - One fixed body for every authorization failure; the cause is never
//!   differentiated, so callers cannot probe which check failed
//! - Content-Type carries an explicit charset to match the wire contract

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// The body sent with every rejected request.
#[derive(Debug, Clone, Serialize)]
pub struct RejectionBody {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl RejectionBody {
    /// The one rejection this gate ever produces: 403, "Invalid API Key".
    pub fn invalid_api_key() -> Self {
        Self {
            message: "Invalid API Key".to_string(),
            status_code: StatusCode::FORBIDDEN.as_u16(),
        }
    }
}

impl IntoResponse for RejectionBody {
    fn into_response(self) -> Response {
        (
            StatusCode::FORBIDDEN,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            Json(self),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_serializes_with_wire_field_names() {
        let body = serde_json::to_value(RejectionBody::invalid_api_key()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "Invalid API Key", "statusCode": 403})
        );
    }

    #[test]
    fn response_is_forbidden_with_charset() {
        let response = RejectionBody::invalid_api_key().into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
    }
}
