use bytes::Bytes;

use crate::domain::{AudioExtension, AudioSource, InputType, PipelineRequest};

#[derive(Debug, Clone)]
pub struct UploadedAudio {
    pub filename: String,
    pub data: Bytes,
}

/// Fields collected from a multipart upload carrying the audio inline.
#[derive(Debug, Clone, Default)]
pub struct InlineUploadForm {
    pub tipo: Option<String>,
    pub user_id: Option<String>,
    pub audio: Option<UploadedAudio>,
}

/// Fields of a request that points at a clip already sitting in blob storage.
#[derive(Debug, Clone, Default)]
pub struct ReferenceUploadForm {
    pub tipo: Option<String>,
    pub user_id: Option<String>,
    pub file_id: Option<String>,
}

pub fn resolve_inline(form: InlineUploadForm) -> Result<PipelineRequest, InputError> {
    let audio = form
        .audio
        .ok_or_else(|| InputError::MissingInput("no audio file provided".to_string()))?;

    let raw_extension = AudioExtension::raw_from_filename(&audio.filename);
    let extension = raw_extension
        .parse::<AudioExtension>()
        .map_err(|_| InputError::UnsupportedMediaType(raw_extension))?;

    tracing::debug!(
        filename = %audio.filename,
        extension = %extension,
        bytes = audio.data.len(),
        "Resolved inline audio upload"
    );

    Ok(PipelineRequest::new(
        InputType::parse(form.tipo.as_deref().map(str::trim)),
        form.user_id.map(|id| id.trim().to_string()),
        AudioSource::Inline {
            filename: audio.filename,
            bytes: audio.data,
            extension,
        },
    ))
}

pub fn resolve_reference(
    form: ReferenceUploadForm,
    bucket_id: &str,
) -> Result<PipelineRequest, InputError> {
    let object_id = form
        .file_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| InputError::MissingInput("file_id is required".to_string()))?;

    tracing::debug!(bucket_id = %bucket_id, object_id = %object_id, "Resolved referenced upload");

    Ok(PipelineRequest::new(
        InputType::parse(form.tipo.as_deref().map(str::trim)),
        form.user_id.map(|id| id.trim().to_string()),
        AudioSource::Remote {
            bucket_id: bucket_id.to_string(),
            object_id,
        },
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("unsupported audio type: .{0}")]
    UnsupportedMediaType(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
}
