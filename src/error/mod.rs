use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::push::DeliveryError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Required request fields are missing
    #[error("{0}")]
    Validation(String),

    /// Request body could not be parsed
    #[error("{0}")]
    InvalidBody(String),

    /// Request body exceeded the configured limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// The push provider rejected or failed the send
    #[error("{0}")]
    Delivery(#[from] DeliveryError),
}

/// Body for client errors: `{"error": "..."}`
#[derive(Serialize)]
struct ClientErrorResponse {
    error: String,
}

/// Body for server errors: `{"success": false, "error": "..."}`
#[derive(Serialize)]
struct FailureResponse {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match &self {
            AppError::Validation(_) | AppError::InvalidBody(_) => {
                tracing::warn!(
                    status = %StatusCode::BAD_REQUEST.as_u16(),
                    message = %message,
                    "Rejected request"
                );

                (
                    StatusCode::BAD_REQUEST,
                    Json(ClientErrorResponse { error: message }),
                )
                    .into_response()
            }
            AppError::PayloadTooLarge(_) => {
                tracing::warn!(message = %message, "Rejected oversized request body");

                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(ClientErrorResponse { error: message }),
                )
                    .into_response()
            }
            AppError::Delivery(e) => {
                tracing::debug!(error = ?e, "Rendering delivery failure");

                // Provider message is surfaced verbatim
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FailureResponse {
                        success: false,
                        error: message,
                    }),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
