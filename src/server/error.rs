use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};

use crate::auth::AuthError;
use crate::backend::BackendError;
use crate::protocol::ErrorResponse;

pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing API key";
pub const SERVER_ERROR_MESSAGE: &str = "An error occurred on the server.";
pub const INVALID_BODY_MESSAGE: &str = "Request body must be a JSON object with a string 'prompt' field";

/// Outcome of a failed request, mapped to a response in one place.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized: {0}")]
    Unauthorized(#[from] AuthError),

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("upstream failure: {0}")]
    Upstream(#[from] BackendError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(reason) => {
                debug!(reason = %reason, "rejected credential");
                write_error(StatusCode::FORBIDDEN, UNAUTHORIZED_MESSAGE)
            }
            ApiError::InvalidBody(rejection) => {
                debug!(error = %rejection.body_text(), "rejected request body");
                write_error(rejection.status(), INVALID_BODY_MESSAGE)
            }
            ApiError::Upstream(e) => {
                error!(error = %e, "Error occurred");
                write_error(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
            }
        }
    }
}

pub fn write_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: message.to_string(),
        }),
    )
        .into_response()
}
