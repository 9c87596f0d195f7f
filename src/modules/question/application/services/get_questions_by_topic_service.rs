use async_trait::async_trait;
use tracing::info;

use crate::question::application::ports::{
    incoming::use_cases::{GetQuestionsByTopicError, GetQuestionsByTopicUseCase},
    outgoing::{QuestionRecord, QuestionRepository},
};
use crate::topic::application::ports::outgoing::TopicRepository;

#[derive(Debug, Clone)]
pub struct GetQuestionsByTopicService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    question_repository: Q,
    topic_repository: T,
}

impl<Q, T> GetQuestionsByTopicService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    pub fn new(question_repository: Q, topic_repository: T) -> Self {
        Self {
            question_repository,
            topic_repository,
        }
    }
}

#[async_trait]
impl<Q, T> GetQuestionsByTopicUseCase for GetQuestionsByTopicService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: &str,
    ) -> Result<Vec<QuestionRecord>, GetQuestionsByTopicError> {
        info!(topic_id, "Fetching questions by topic");

        let topic = self
            .topic_repository
            .find_by_id(topic_id)
            .await
            .map_err(|e| GetQuestionsByTopicError::RepositoryError(e.to_string()))?;
        if topic.is_none() {
            return Err(GetQuestionsByTopicError::TopicNotFound);
        }

        self.question_repository
            .find_by_topic_id(topic_id)
            .await
            .map_err(|e| GetQuestionsByTopicError::RepositoryError(e.to_string()))
    }
}
