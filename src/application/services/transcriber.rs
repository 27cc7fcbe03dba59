use std::sync::Arc;

use crate::application::ports::{TempAudioStore, TranscriptionEngine, TranscriptionRequest};
use crate::domain::TempAudioHandle;
use crate::infrastructure::observability::sanitize_text;

use super::PipelineError;

/// Reads a materialized clip back from temp storage and turns it into text.
pub struct Transcriber {
    engine: Arc<dyn TranscriptionEngine>,
    temp_store: Arc<dyn TempAudioStore>,
}

impl Transcriber {
    pub fn new(engine: Arc<dyn TranscriptionEngine>, temp_store: Arc<dyn TempAudioStore>) -> Self {
        Self { engine, temp_store }
    }

    pub async fn transcribe(
        &self,
        handle: &TempAudioHandle,
        language: &str,
    ) -> Result<String, PipelineError> {
        let audio_data = self.temp_store.read(handle).await?;
        let extension = handle.extension();

        tracing::debug!(
            file_name = %handle.file_name(),
            bytes = audio_data.len(),
            language = %language,
            "Starting audio transcription"
        );

        let raw = self
            .engine
            .transcribe(TranscriptionRequest {
                audio_data: &audio_data,
                file_name: handle.file_name(),
                mime_type: extension.as_mime(),
                language,
            })
            .await
            .map_err(PipelineError::Transcription)?;

        let text = raw.trim();
        if text.is_empty() {
            tracing::warn!("Transcription returned only whitespace");
            return Err(PipelineError::EmptyTranscription);
        }

        tracing::debug!(transcript = %sanitize_text(text), "Transcription completed");
        Ok(text.to_string())
    }
}
