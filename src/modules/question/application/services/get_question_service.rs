use async_trait::async_trait;
use tracing::info;

use crate::question::application::ports::{
    incoming::use_cases::{GetQuestionError, GetQuestionUseCase},
    outgoing::{QuestionRecord, QuestionRepository},
};

#[derive(Debug, Clone)]
pub struct GetQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetQuestionUseCase for GetQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    async fn execute(&self, question_id: &str) -> Result<QuestionRecord, GetQuestionError> {
        info!(question_id, "Fetching question by id");

        self.repository
            .find_by_id(question_id)
            .await
            .map_err(|e| GetQuestionError::RepositoryError(e.to_string()))?
            .ok_or(GetQuestionError::QuestionNotFound)
    }
}
