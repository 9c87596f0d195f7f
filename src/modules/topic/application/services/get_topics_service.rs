use async_trait::async_trait;
use tracing::info;

use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicsError, GetTopicsUseCase},
    outgoing::{TopicRecord, TopicRepository},
};

#[derive(Debug, Clone)]
pub struct GetTopicsService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetTopicsService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetTopicsUseCase for GetTopicsService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<TopicRecord>, GetTopicsError> {
        info!("Fetching all topics");

        self.repository
            .find_all()
            .await
            .map_err(|e| GetTopicsError::RepositoryError(e.to_string()))
    }
}
