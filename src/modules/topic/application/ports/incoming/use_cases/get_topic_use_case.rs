use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: &str) -> Result<TopicRecord, GetTopicError>;
}
