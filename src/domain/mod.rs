mod audio_extension;
mod audio_source;
mod history_record;
mod input_type;
mod pipeline_request;
mod temp_audio_handle;

pub use audio_extension::AudioExtension;
pub use audio_source::{AudioSource, REMOTE_AUDIO_EXTENSION};
pub use history_record::HistoryRecord;
pub use input_type::{InputType, RecordType, SOURCE_LANGUAGE, TARGET_LANGUAGE};
pub use pipeline_request::{ANONYMOUS_USER, PipelineRequest};
pub use temp_audio_handle::TempAudioHandle;
