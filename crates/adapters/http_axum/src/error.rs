//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_domain::error::{HbnbError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Maps [`HbnbError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HbnbError);

impl From<HbnbError> for ApiError {
    fn from(err: HbnbError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(HbnbError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            HbnbError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Bad Request",
                    description: Some(err.to_string()),
                },
            ),
            HbnbError::NotFound(err) => {
                tracing::debug!(%err, "not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorBody {
                        error: "Not found",
                        description: None,
                    },
                )
            }
            HbnbError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal Server Error",
                        description: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
