//! Error types for the vignette service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;
use vignettes_client::VignettesError;

/// Startup errors
#[derive(Debug)]
pub enum ServiceError {
    /// Configuration error
    Config(String),
    /// Failed to bind or serve
    Io(std::io::Error),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<tracing_subscriber::filter::ParseError> for ServiceError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<VignettesError> for ServiceError {
    fn from(e: VignettesError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Request error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// Required request input missing
    BadRequest(String),
    /// Deployment configuration absent
    Config(String),
    /// Backend answered with a non-success status
    Upstream(StatusCode),
    /// Anything unexpected
    Internal(String),
}

impl ApiError {
    pub const UPSTREAM_MESSAGE: &'static str = "Failed to fetch vignettes from backend";
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Config(msg) => {
                tracing::error!(error = %msg, "Service misconfigured");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Upstream(status) => (status, Self::UPSTREAM_MESSAGE.into()),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<VignettesError> for ApiError {
    fn from(e: VignettesError) -> Self {
        match e {
            VignettesError::Status(code) => ApiError::Upstream(
                StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
            ),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_config_error_display() {
        let err = ServiceError::Config("missing PORT".to_string());
        assert_eq!(format!("{}", err), "Configuration error: missing PORT");
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let response = ApiError::BadRequest("Category parameter is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Category parameter is required" })
        );
    }

    #[tokio::test]
    async fn test_upstream_status_forwarded() {
        let response = ApiError::from(VignettesError::Status(404)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to fetch vignettes from backend" })
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = ApiError::from(VignettesError::Json(parse_err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal server error" })
        );
    }

    #[test]
    fn test_invalid_upstream_status_maps_to_bad_gateway() {
        match ApiError::from(VignettesError::Status(42)) {
            ApiError::Upstream(status) => assert_eq!(status, StatusCode::BAD_GATEWAY),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
