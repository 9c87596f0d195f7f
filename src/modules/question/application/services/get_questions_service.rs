use async_trait::async_trait;
use tracing::info;

use crate::question::application::ports::{
    incoming::use_cases::{GetQuestionsError, GetQuestionsUseCase},
    outgoing::{QuestionRecord, QuestionRepository},
};

#[derive(Debug, Clone)]
pub struct GetQuestionsService<R>
where
    R: QuestionRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetQuestionsService<R>
where
    R: QuestionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetQuestionsUseCase for GetQuestionsService<R>
where
    R: QuestionRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<QuestionRecord>, GetQuestionsError> {
        info!("Fetching all questions");

        self.repository
            .find_all()
            .await
            .map_err(|e| GetQuestionsError::RepositoryError(e.to_string()))
    }
}
