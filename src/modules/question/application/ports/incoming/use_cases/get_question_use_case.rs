use async_trait::async_trait;

use crate::question::application::ports::outgoing::QuestionRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetQuestionError {
    #[error("Question not found")]
    QuestionNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetQuestionUseCase: Send + Sync {
    async fn execute(&self, question_id: &str) -> Result<QuestionRecord, GetQuestionError>;
}
