#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Generic message returned on any internal failure. Server-side logs carry
/// the full detail; the caller only ever sees this.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno ao gerar o relatório PDF.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Origin {0} não permitido pelo CORS da API")]
    OriginNotAllowed(String),

    #[error("Report template not found at {0}")]
    TemplateMissing(String),

    #[error("PDF render failed: {0}")]
    RenderFailure(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::OriginNotAllowed(_) => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::TemplateMissing(path) => {
                tracing::error!("Report template missing: {path}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::RenderFailure(detail) => {
                tracing::error!("PDF render failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}
