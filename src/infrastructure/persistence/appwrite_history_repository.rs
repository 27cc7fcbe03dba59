use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use crate::application::ports::{HistoryRepository, RepositoryError};
use crate::domain::HistoryRecord;
use crate::infrastructure::appwrite::AppwriteClient;

/// Asks Appwrite to mint the document id.
const UNIQUE_DOCUMENT_ID: &str = "unique()";

pub struct AppwriteHistoryRepository {
    client: AppwriteClient,
    database_id: String,
    collection_id: String,
}

#[derive(Serialize)]
struct CreateDocumentRequest<'a> {
    #[serde(rename = "documentId")]
    document_id: &'a str,
    data: HistoryDocument<'a>,
}

#[derive(Serialize)]
struct HistoryDocument<'a> {
    user_id: &'a str,
    tipo: &'a str,
    idioma: &'a str,
    fecha_hora: String,
}

impl AppwriteHistoryRepository {
    pub fn new(client: AppwriteClient, database_id: String, collection_id: String) -> Self {
        Self {
            client,
            database_id,
            collection_id,
        }
    }
}

#[async_trait]
impl HistoryRepository for AppwriteHistoryRepository {
    #[instrument(skip(self, record), fields(user_id = %record.user_id, tipo = %record.record_type))]
    async fn create(&self, record: &HistoryRecord) -> Result<(), RepositoryError> {
        let path = format!(
            "/databases/{}/collections/{}/documents",
            self.database_id, self.collection_id
        );
        let body = CreateDocumentRequest {
            document_id: UNIQUE_DOCUMENT_ID,
            data: HistoryDocument {
                user_id: &record.user_id,
                tipo: record.record_type.as_str(),
                idioma: &record.language,
                fecha_hora: record.timestamp(),
            },
        };

        let response = self
            .client
            .request(Method::POST, &path)
            .json(&body)
            .send()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::WriteRejected(format!(
                "status {}: {}",
                status, body
            )));
        }

        tracing::debug!("History record stored");
        Ok(())
    }
}
