use async_trait::async_trait;

use crate::domain::HistoryRecord;

use super::RepositoryError;

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn create(&self, record: &HistoryRecord) -> Result<(), RepositoryError>;
}
