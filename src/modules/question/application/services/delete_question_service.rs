use async_trait::async_trait;
use tracing::info;

use crate::question::application::ports::{
    incoming::use_cases::{DeleteQuestionError, DeleteQuestionUseCase},
    outgoing::QuestionRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteQuestionUseCase for DeleteQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    async fn execute(&self, question_id: &str) -> Result<(), DeleteQuestionError> {
        info!(question_id, "Deleting question");

        let deleted = self
            .repository
            .delete(question_id)
            .await
            .map_err(|e| DeleteQuestionError::RepositoryError(e.to_string()))?;

        if deleted {
            Ok(())
        } else {
            Err(DeleteQuestionError::QuestionNotFound)
        }
    }
}
