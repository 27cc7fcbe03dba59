mod openai_whisper_engine;

pub use openai_whisper_engine::{DEFAULT_TRANSCRIPTION_MODEL, OpenAiWhisperEngine};
