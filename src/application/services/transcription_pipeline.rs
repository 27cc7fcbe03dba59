use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;

use crate::application::ports::{
    BlobStore, HistoryRepository, LlmClient, TempAudioStore, TranscriptionEngine,
};
use crate::domain::{
    AudioSource, HistoryRecord, InputType, PipelineRequest, RecordType, TempAudioHandle,
};

use super::{PipelineError, Transcriber, Translator};

/// Result of a completed run, ready to be rendered for the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub record_type: RecordType,
    pub language: String,
    pub transcription: String,
    pub translation: Option<String>,
}

/// Drives one request from resolved audio source to persisted history record.
///
/// Stages run strictly in order: load, stage to temp, transcribe, translate
/// (only for `en`), release temp, drop the remote blob (referenced uploads
/// only), write history. The temp file is released on every path once it has
/// been acquired, and a failed remote delete never fails the run.
pub struct TranscriptionPipeline {
    blob_store: Arc<dyn BlobStore>,
    temp_store: Arc<dyn TempAudioStore>,
    history_repository: Arc<dyn HistoryRepository>,
    transcriber: Transcriber,
    translator: Translator,
}

impl TranscriptionPipeline {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<dyn LlmClient>,
        blob_store: Arc<dyn BlobStore>,
        temp_store: Arc<dyn TempAudioStore>,
        history_repository: Arc<dyn HistoryRepository>,
        translation_prompt: String,
    ) -> Self {
        Self {
            transcriber: Transcriber::new(transcription_engine, Arc::clone(&temp_store)),
            translator: Translator::new(llm_client, translation_prompt),
            blob_store,
            temp_store,
            history_repository,
        }
    }

    pub async fn run(&self, request: PipelineRequest) -> Result<PipelineOutcome, PipelineError> {
        let PipelineRequest {
            input_type,
            user_id,
            audio_source,
        } = request;

        let audio_data = self.load_audio(&audio_source).await?;
        let handle = self
            .temp_store
            .acquire(&audio_data, audio_source.extension())
            .await?;
        drop(audio_data);

        let recognized = self.recognize(&handle, &input_type).await;
        self.release_temp(&handle).await;
        let (transcription, translation) = recognized?;

        if let AudioSource::Remote {
            bucket_id,
            object_id,
        } = &audio_source
        {
            self.cleanup_remote(bucket_id, object_id).await;
        }

        let record = HistoryRecord::new(user_id, &input_type, Utc::now());
        if let Err(e) = self.history_repository.create(&record).await {
            tracing::error!(
                error = %e,
                user_id = %record.user_id,
                record_type = %record.record_type,
                "Failed to write history record; discarding computed text"
            );
            return Err(PipelineError::Persistence(e));
        }

        tracing::info!(
            user_id = %record.user_id,
            record_type = %record.record_type,
            language = %record.language,
            translated = translation.is_some(),
            "Transcription pipeline completed"
        );

        Ok(PipelineOutcome {
            record_type: record.record_type,
            language: record.language,
            transcription,
            translation,
        })
    }

    async fn load_audio(&self, source: &AudioSource) -> Result<Bytes, PipelineError> {
        match source {
            AudioSource::Inline { bytes, .. } => Ok(bytes.clone()),
            AudioSource::Remote {
                bucket_id,
                object_id,
            } => {
                tracing::debug!(bucket_id = %bucket_id, object_id = %object_id, "Downloading referenced audio");
                self.blob_store
                    .fetch(bucket_id, object_id)
                    .await
                    .map_err(PipelineError::Download)
            }
        }
    }

    async fn recognize(
        &self,
        handle: &TempAudioHandle,
        input_type: &InputType,
    ) -> Result<(String, Option<String>), PipelineError> {
        let transcription = self
            .transcriber
            .transcribe(handle, input_type.language_hint())
            .await?;
        let translation = self
            .translator
            .maybe_translate(&transcription, input_type)
            .await?;
        Ok((transcription, translation))
    }

    async fn release_temp(&self, handle: &TempAudioHandle) {
        if let Err(e) = self.temp_store.release(handle).await {
            tracing::warn!(
                error = %e,
                path = %handle.path().display(),
                "Failed to remove temporary audio file"
            );
        }
    }

    async fn cleanup_remote(&self, bucket_id: &str, object_id: &str) {
        match self.blob_store.delete(bucket_id, object_id).await {
            Ok(()) => {
                tracing::debug!(bucket_id = %bucket_id, object_id = %object_id, "Deleted referenced audio");
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    bucket_id = %bucket_id,
                    object_id = %object_id,
                    "Failed to delete referenced audio after processing"
                );
            }
        }
    }
}
