use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{InputError, PipelineError, PipelineOutcome};

#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub success: bool,
    pub tipo: String,
    pub idioma: String,
    pub transcription: String,
    pub translation: Option<String>,
}

impl From<PipelineOutcome> for TranscriptionResponse {
    fn from(outcome: PipelineOutcome) -> Self {
        Self {
            success: true,
            tipo: outcome.record_type.as_str().to_string(),
            idioma: outcome.language,
            transcription: outcome.transcription,
            translation: outcome.translation,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Every failure a handler can surface, rendered as `{success: false, error}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Input(InputError::PayloadTooLarge(_)) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Input(_) => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(PipelineError::EmptyTranscription) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
