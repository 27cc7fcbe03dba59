mod blob_store;
mod history_repository;
mod llm_client;
mod repository_error;
mod temp_audio_store;
mod transcription_engine;

pub use blob_store::{BlobStore, BlobStoreError};
pub use history_repository::HistoryRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use temp_audio_store::{TempAudioStore, TempStoreError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError, TranscriptionRequest};
