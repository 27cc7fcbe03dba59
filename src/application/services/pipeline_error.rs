use crate::application::ports::{
    BlobStoreError, LlmClientError, RepositoryError, TempStoreError, TranscriptionError,
};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("download: {0}")]
    Download(BlobStoreError),
    #[error("temp storage: {0}")]
    TempStorage(#[from] TempStoreError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("transcription produced no text")]
    EmptyTranscription,
    #[error("translation: {0}")]
    Translation(LlmClientError),
    #[error("history: {0}")]
    Persistence(RepositoryError),
}
