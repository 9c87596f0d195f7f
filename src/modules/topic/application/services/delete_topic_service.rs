use async_trait::async_trait;
use tracing::info;

use crate::topic::application::ports::{
    incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
    outgoing::TopicRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTopicUseCase for DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, topic_id: &str) -> Result<(), DeleteTopicError> {
        info!(topic_id, "Deleting topic");

        let deleted = self
            .repository
            .delete(topic_id)
            .await
            .map_err(|e| DeleteTopicError::RepositoryError(e.to_string()))?;

        if deleted {
            Ok(())
        } else {
            Err(DeleteTopicError::TopicNotFound)
        }
    }
}
