use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Method, StatusCode};

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::infrastructure::appwrite::AppwriteClient;

pub struct AppwriteBucketStore {
    client: AppwriteClient,
}

impl AppwriteBucketStore {
    pub fn new(client: AppwriteClient) -> Self {
        Self { client }
    }

    fn file_path(bucket_id: &str, object_id: &str) -> String {
        format!("/storage/buckets/{}/files/{}", bucket_id, object_id)
    }
}

#[async_trait]
impl BlobStore for AppwriteBucketStore {
    async fn fetch(&self, bucket_id: &str, object_id: &str) -> Result<Bytes, BlobStoreError> {
        let path = format!("{}/download", Self::file_path(bucket_id, object_id));
        let response = self
            .client
            .request(Method::GET, &path)
            .send()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(BlobStoreError::NotFound(format!(
                "{}/{}",
                bucket_id, object_id
            ))),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(BlobStoreError::DownloadFailed(format!(
                    "status {}: {}",
                    status, body
                )))
            }
            _ => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;
                tracing::debug!(object_id = %object_id, bytes = bytes.len(), "Downloaded blob");
                Ok(bytes)
            }
        }
    }

    async fn delete(&self, bucket_id: &str, object_id: &str) -> Result<(), BlobStoreError> {
        let response = self
            .client
            .request(Method::DELETE, &Self::file_path(bucket_id, object_id))
            .send()
            .await
            .map_err(|e| BlobStoreError::DeleteFailed(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(BlobStoreError::NotFound(format!(
                "{}/{}",
                bucket_id, object_id
            ))),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(BlobStoreError::DeleteFailed(format!(
                    "status {}: {}",
                    status, body
                )))
            }
            _ => Ok(()),
        }
    }
}
