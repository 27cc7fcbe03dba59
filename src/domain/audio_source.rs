use bytes::Bytes;

use super::AudioExtension;

/// Container type every referenced blob is materialized as.
pub const REMOTE_AUDIO_EXTENSION: AudioExtension = AudioExtension::M4a;

#[derive(Debug, Clone, PartialEq)]
pub enum AudioSource {
    Inline {
        filename: String,
        bytes: Bytes,
        extension: AudioExtension,
    },
    Remote {
        bucket_id: String,
        object_id: String,
    },
}

impl AudioSource {
    pub fn extension(&self) -> AudioExtension {
        match self {
            Self::Inline { extension, .. } => *extension,
            Self::Remote { .. } => REMOTE_AUDIO_EXTENSION,
        }
    }
}
