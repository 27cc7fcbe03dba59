use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError, TranscriptionRequest};

pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-large-v3";

/// Speech-to-text over any OpenAI-compatible `/audio/transcriptions` endpoint
/// (Groq, OpenAI).
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiWhisperEngine {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String, model: String) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        request: TranscriptionRequest<'_>,
    ) -> Result<String, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(request.audio_data.to_vec())
            .file_name(request.file_name.to_string())
            .mime_str(request.mime_type)
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "json")
            .text("language", request.language.to_string())
            .text("temperature", "0")
            .part("file", file_part);

        tracing::debug!(
            model = %self.model,
            language = %request.language,
            file_name = %request.file_name,
            "Sending audio to transcription API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        tracing::info!(
            chars = result.text.len(),
            model = %self.model,
            "Transcription API call completed"
        );

        Ok(result.text.trim().to_string())
    }
}
