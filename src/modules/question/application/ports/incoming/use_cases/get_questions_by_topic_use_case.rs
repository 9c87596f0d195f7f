use async_trait::async_trait;

use crate::question::application::ports::outgoing::QuestionRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetQuestionsByTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetQuestionsByTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: &str)
        -> Result<Vec<QuestionRecord>, GetQuestionsByTopicError>;
}
