use std::io;

use async_trait::async_trait;

use crate::domain::{AudioExtension, TempAudioHandle};

/// Scoped local storage for audio bytes between retrieval and transcription.
///
/// `release` must succeed when the file is already gone, so callers can run it
/// on every exit path without tracking whether it already ran.
#[async_trait]
pub trait TempAudioStore: Send + Sync {
    async fn acquire(
        &self,
        data: &[u8],
        extension: AudioExtension,
    ) -> Result<TempAudioHandle, TempStoreError>;

    async fn read(&self, handle: &TempAudioHandle) -> Result<Vec<u8>, TempStoreError>;

    async fn release(&self, handle: &TempAudioHandle) -> Result<(), TempStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TempStoreError {
    #[error("write failed: {0}")]
    WriteFailed(io::Error),
    #[error("read failed: {0}")]
    ReadFailed(io::Error),
    #[error("delete failed: {0}")]
    DeleteFailed(io::Error),
}
