use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::application::services::{InputError, ReferenceUploadForm, resolve_reference};
use crate::presentation::handlers::response::{ApiError, TranscriptionResponse};
use crate::presentation::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TranscribeReferenceRequest {
    pub file_id: Option<String>,
    pub tipo: Option<String>,
    pub user_id: Option<String>,
}

impl From<TranscribeReferenceRequest> for ReferenceUploadForm {
    fn from(body: TranscribeReferenceRequest) -> Self {
        Self {
            tipo: body.tipo,
            user_id: body.user_id,
            file_id: body.file_id,
        }
    }
}

/// The raw body is parsed by hand so that malformed JSON is reported through
/// the same error envelope as every other failure. An empty body counts as `{}`.
#[tracing::instrument(skip(state, body))]
pub async fn transcribe_reference_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            InputError::PayloadTooLarge(rejection.body_text())
        } else {
            InputError::InvalidRequest(rejection.body_text())
        }
    })?;

    let body: TranscribeReferenceRequest = if body.iter().all(u8::is_ascii_whitespace) {
        TranscribeReferenceRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| InputError::InvalidRequest(format!("invalid JSON body: {}", e)))?
    };

    let request = resolve_reference(body.into(), &state.bucket_id)?;
    let outcome = state.pipeline.run(request).await?;
    Ok(Json(outcome.into()))
}
