use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTopicsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TopicRecord>, GetTopicsError>;
}
