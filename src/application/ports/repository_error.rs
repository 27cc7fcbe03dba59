#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("write rejected: {0}")]
    WriteRejected(String),
}
