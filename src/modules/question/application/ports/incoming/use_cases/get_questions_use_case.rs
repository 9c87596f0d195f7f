use async_trait::async_trait;

use crate::question::application::ports::outgoing::QuestionRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetQuestionsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetQuestionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<QuestionRecord>, GetQuestionsError>;
}
