use std::path::{Path, PathBuf};

use super::AudioExtension;

/// A locally materialized audio file owned by a single pipeline run.
///
/// Not `Clone`: exactly one handle exists per temp file.
#[derive(Debug, PartialEq, Eq)]
pub struct TempAudioHandle {
    path: PathBuf,
    extension: AudioExtension,
}

impl TempAudioHandle {
    pub fn new(path: PathBuf, extension: AudioExtension) -> Self {
        Self { path, extension }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> AudioExtension {
        self.extension
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
    }
}
