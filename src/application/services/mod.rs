mod input_resolver;
mod pipeline_error;
mod transcriber;
mod transcription_pipeline;
mod translator;

pub use input_resolver::{
    InlineUploadForm, InputError, ReferenceUploadForm, UploadedAudio, resolve_inline,
    resolve_reference,
};
pub use pipeline_error::PipelineError;
pub use transcriber::Transcriber;
pub use transcription_pipeline::{PipelineOutcome, TranscriptionPipeline};
pub use translator::{DEFAULT_TRANSLATION_PROMPT, Translator};
