use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// Deletion is unconditional: questions referencing the topic are left in
// place (no cascade check).
#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: &str) -> Result<(), DeleteTopicError>;
}
