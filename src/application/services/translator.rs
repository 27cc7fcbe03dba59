use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::domain::InputType;
use crate::infrastructure::observability::sanitize_text;

use super::PipelineError;

pub const DEFAULT_TRANSLATION_PROMPT: &str = "Traduce al español el siguiente texto: {text}";

const TEXT_PLACEHOLDER: &str = "{text}";

pub struct Translator {
    llm_client: Arc<dyn LlmClient>,
    prompt_template: String,
}

impl Translator {
    pub fn new(llm_client: Arc<dyn LlmClient>, prompt_template: String) -> Self {
        Self {
            llm_client,
            prompt_template,
        }
    }

    /// Translates `text` when `input_type` asks for it, otherwise returns `None`
    /// without touching the provider.
    pub async fn maybe_translate(
        &self,
        text: &str,
        input_type: &InputType,
    ) -> Result<Option<String>, PipelineError> {
        if !input_type.requires_translation() {
            return Ok(None);
        }

        let prompt = self.build_prompt(text);
        tracing::debug!(prompt = %sanitize_text(&prompt), "Requesting translation");

        let translated = self
            .llm_client
            .complete(&prompt)
            .await
            .map_err(PipelineError::Translation)?;

        Ok(Some(translated.trim().to_string()))
    }

    fn build_prompt(&self, text: &str) -> String {
        if self.prompt_template.contains(TEXT_PLACEHOLDER) {
            self.prompt_template.replace(TEXT_PLACEHOLDER, text)
        } else {
            format!("{} {}", self.prompt_template.trim_end(), text)
        }
    }
}
