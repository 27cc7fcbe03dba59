use axum::Json;
use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;

use crate::application::services::{
    InlineUploadForm, InputError, UploadedAudio, resolve_inline,
};
use crate::presentation::handlers::response::{ApiError, TranscriptionResponse};
use crate::presentation::state::AppState;

const AUDIO_FIELD: &str = "audio";

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    let multipart = multipart.map_err(|rejection| {
        InputError::InvalidRequest(format!("expected multipart form: {}", rejection.body_text()))
    })?;
    let form = read_upload_form(multipart).await?;
    let request = resolve_inline(form)?;
    let outcome = state.pipeline.run(request).await?;
    Ok(Json(outcome.into()))
}

async fn read_upload_form(mut multipart: Multipart) -> Result<InlineUploadForm, InputError> {
    let mut form = InlineUploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("failed to read multipart", e))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            AUDIO_FIELD => {
                let filename = field.file_name().unwrap_or(AUDIO_FIELD).to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("failed to read audio", e))?;
                tracing::debug!(filename = %filename, bytes = data.len(), "Audio part received");
                form.audio = Some(UploadedAudio { filename, data });
            }
            "tipo" => form.tipo = Some(read_text(field).await?),
            "user_id" => form.user_id = Some(read_text(field).await?),
            other => tracing::debug!(field = %other, "Ignoring unknown multipart field"),
        }
    }

    Ok(form)
}

async fn read_text(field: Field<'_>) -> Result<String, InputError> {
    let name = field.name().unwrap_or_default().to_string();
    field
        .text()
        .await
        .map_err(|e| multipart_error(&format!("failed to read field {}", name), e))
}

/// Upload limit breaches surface as 413, everything else as a malformed request.
fn multipart_error(context: &str, error: MultipartError) -> InputError {
    let message = format!("{}: {}", context, error.body_text());
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        InputError::PayloadTooLarge(message)
    } else {
        InputError::InvalidRequest(message)
    }
}
