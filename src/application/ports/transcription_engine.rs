use async_trait::async_trait;

/// One speech-to-text call: the audio payload plus the hints sent alongside it.
#[derive(Debug, Clone, Copy)]
pub struct TranscriptionRequest<'a> {
    pub audio_data: &'a [u8],
    pub file_name: &'a str,
    pub mime_type: &'a str,
    pub language: &'a str,
}

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        request: TranscriptionRequest<'_>,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
