use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{TempAudioStore, TempStoreError};
use crate::domain::{AudioExtension, TempAudioHandle};

/// Temp audio files under a shared directory, one `<uuid>.<ext>` file per run.
pub struct TempFileStore {
    base_path: PathBuf,
}

impl TempFileStore {
    pub fn new(base_path: PathBuf) -> Result<Self, TempStoreError> {
        std::fs::create_dir_all(&base_path).map_err(TempStoreError::WriteFailed)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &std::path::Path {
        &self.base_path
    }
}

#[async_trait]
impl TempAudioStore for TempFileStore {
    async fn acquire(
        &self,
        data: &[u8],
        extension: AudioExtension,
    ) -> Result<TempAudioHandle, TempStoreError> {
        let path = self
            .base_path
            .join(format!("{}.{}", Uuid::new_v4(), extension.as_str()));

        if let Err(e) = tokio::fs::write(&path, data).await {
            let _ = tokio::fs::remove_file(&path).await;
            return Err(TempStoreError::WriteFailed(e));
        }

        tracing::debug!(path = %path.display(), bytes = data.len(), "Staged audio to temp file");
        Ok(TempAudioHandle::new(path, extension))
    }

    async fn read(&self, handle: &TempAudioHandle) -> Result<Vec<u8>, TempStoreError> {
        tokio::fs::read(handle.path())
            .await
            .map_err(TempStoreError::ReadFailed)
    }

    async fn release(&self, handle: &TempAudioHandle) -> Result<(), TempStoreError> {
        match tokio::fs::remove_file(handle.path()).await {
            Ok(()) => {
                tracing::debug!(path = %handle.path().display(), "Removed temp audio file");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TempStoreError::DeleteFailed(e)),
        }
    }
}
