use super::dto::ErrorResponse;
use crate::error::ReceiptError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let status = match &self {
            ReceiptError::InvalidReceipt(_) => StatusCode::BAD_REQUEST,
            ReceiptError::NotFound(_) => StatusCode::NOT_FOUND,
            ReceiptError::Io(e) => {
                tracing::error!(error = %e, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        json_error(status, self.to_string())
    }
}

/// Any body the JSON extractor refuses is a client error, whatever axum's default status.
pub fn json_rejection(rejection: JsonRejection) -> Response {
    tracing::warn!(error = %rejection.body_text(), "malformed request body");
    json_error(StatusCode::BAD_REQUEST, rejection.body_text())
}
