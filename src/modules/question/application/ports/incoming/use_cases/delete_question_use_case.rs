use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteQuestionError {
    #[error("Question not found")]
    QuestionNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteQuestionUseCase: Send + Sync {
    async fn execute(&self, question_id: &str) -> Result<(), DeleteQuestionError>;
}
