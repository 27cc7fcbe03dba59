use async_trait::async_trait;
use bytes::Bytes;

/// Remote storage holding audio clips uploaded ahead of a referenced request.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn fetch(&self, bucket_id: &str, object_id: &str) -> Result<Bytes, BlobStoreError>;

    async fn delete(&self, bucket_id: &str, object_id: &str) -> Result<(), BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
