// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::services::generator::GenerateError;

/// The Display strings below are the wire contract: callers only ever
/// see one of these two messages, never the wrapped detail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request, \"message\" field is required.")]
    InvalidRequest,

    #[error("An error occurred while processing the request.")]
    Upstream(#[source] GenerateError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            AppError::Upstream(err) => {
                error!("an error occurred: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
