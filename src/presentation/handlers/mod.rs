mod health;
pub mod response;
mod transcribe;
mod transcribe_reference;

pub use health::health_handler;
pub use response::{ApiError, ErrorResponse, TranscriptionResponse};
pub use transcribe::transcribe_upload_handler;
pub use transcribe_reference::{TranscribeReferenceRequest, transcribe_reference_handler};
