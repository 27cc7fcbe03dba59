use super::{AudioSource, InputType};

pub const ANONYMOUS_USER: &str = "anonimo";

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRequest {
    pub input_type: InputType,
    pub user_id: String,
    pub audio_source: AudioSource,
}

impl PipelineRequest {
    pub fn new(input_type: InputType, user_id: Option<String>, audio_source: AudioSource) -> Self {
        Self {
            input_type,
            user_id: user_id.unwrap_or_else(|| ANONYMOUS_USER.to_string()),
            audio_source,
        }
    }
}
