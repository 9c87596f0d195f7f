use async_trait::async_trait;
use tracing::info;

use crate::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{TopicRepository, TopicRecord, UpdateTopicData},
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateTopicUseCase for UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: &str,
        command: UpdateTopicCommand,
    ) -> Result<TopicRecord, UpdateTopicError> {
        info!(topic_id, "Updating topic");

        let existing = self
            .repository
            .find_by_id(topic_id)
            .await
            .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?;
        if existing.is_none() {
            return Err(UpdateTopicError::TopicNotFound);
        }

        // Re-check name uniqueness when the name changes, excluding self.
        if let Some(name) = command.name() {
            let topics = self
                .repository
                .find_all()
                .await
                .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?;

            let name_lower = name.to_lowercase();
            if topics
                .iter()
                .any(|topic| topic.id != topic_id && topic.name.to_lowercase() == name_lower)
            {
                return Err(UpdateTopicError::DuplicateName);
            }
        }

        let data = UpdateTopicData {
            name: command.name().cloned(),
            description: command.description().cloned(),
            image_url: command.image_url().cloned(),
        };

        self.repository
            .update(topic_id, data)
            .await
            .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTopicError::TopicNotFound)
    }
}
