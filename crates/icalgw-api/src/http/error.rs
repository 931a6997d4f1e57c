//! Export error mapping to HTTP status codes and JSON bodies.
//!
//! All pipeline failures convert to exactly one HTTP response here;
//! nothing escapes the handler boundary. CORS headers are stamped by the
//! middleware layer, not per error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use icalgw_types::error::{ExportError, InvokeError};

/// Newtype so the export pipeline's error can be an axum rejection.
#[derive(Debug)]
pub struct AppError(pub ExportError);

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            ExportError::MissingToken => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing export token" }),
            ),
            ExportError::Config(e) => {
                tracing::error!(error = %e, "gateway misconfigured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": format!("Server configuration error: {e}") }),
                )
            }
            ExportError::Invoke(InvokeError::Status { status, body }) => {
                tracing::error!(status = *status, "backend export failed");
                (
                    // Pass the backend's status through when it is a valid
                    // HTTP code; anything else becomes a 500.
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    json!({
                        "error": "Failed to generate iCal feed",
                        "detail": body,
                    }),
                )
            }
            ExportError::Invoke(e) => {
                tracing::error!(error = %e, "backend export failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to generate iCal feed",
                        "detail": e.to_string(),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use icalgw_types::error::ConfigError;

    #[test]
    fn test_missing_token_maps_to_400() {
        let response = AppError(ExportError::MissingToken).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_config_error_maps_to_500() {
        let response =
            AppError(ExportError::Config(ConfigError::Missing("ICALGW_APP_ID"))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_backend_status_passes_through() {
        let err = ExportError::Invoke(InvokeError::Status {
            status: 503,
            body: "maintenance".to_string(),
        });
        let response = AppError(err).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_backend_status_becomes_500() {
        let err = ExportError::Invoke(InvokeError::Status {
            status: 99,
            body: String::new(),
        });
        let response = AppError(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_timeout_maps_to_500() {
        let response = AppError(ExportError::Invoke(InvokeError::Timeout)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
