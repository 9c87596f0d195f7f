use async_trait::async_trait;
use tracing::info;

use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{CreateTopicData, TopicRecord, TopicRepository},
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError> {
        info!(name = command.name(), "Creating topic");

        // Name uniqueness is case-insensitive across all topics.
        let existing = self
            .repository
            .find_all()
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?;

        let name_lower = command.name().to_lowercase();
        if existing
            .iter()
            .any(|topic| topic.name.to_lowercase() == name_lower)
        {
            return Err(CreateTopicError::DuplicateName);
        }

        let data = CreateTopicData {
            name: command.name().to_string(),
            description: command.description().to_string(),
            image_url: command.image_url().cloned(),
        };

        self.repository
            .create(data)
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))
    }
}
