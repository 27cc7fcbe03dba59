mod openai_client;

pub use openai_client::{DEFAULT_TRANSLATION_MODEL, OpenAiClient};
