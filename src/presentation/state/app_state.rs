use std::sync::Arc;

use crate::application::services::TranscriptionPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TranscriptionPipeline>,
    /// Bucket referenced uploads are read from.
    pub bucket_id: Arc<str>,
}

impl AppState {
    pub fn new(pipeline: Arc<TranscriptionPipeline>, bucket_id: impl Into<Arc<str>>) -> Self {
        Self {
            pipeline,
            bucket_id: bucket_id.into(),
        }
    }
}
