use async_trait::async_trait;
use tracing::info;

use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicError, GetTopicUseCase},
    outgoing::{TopicRecord, TopicRepository},
};

#[derive(Debug, Clone)]
pub struct GetTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetTopicUseCase for GetTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, topic_id: &str) -> Result<TopicRecord, GetTopicError> {
        info!(topic_id, "Fetching topic by id");

        self.repository
            .find_by_id(topic_id)
            .await
            .map_err(|e| GetTopicError::RepositoryError(e.to_string()))?
            .ok_or(GetTopicError::TopicNotFound)
    }
}
