use async_trait::async_trait;
use serde::Serialize;

use crate::question::application::ports::outgoing::QuestionRecord;

/// Position of a question within its topic's sequence. Boundary fields are
/// serialized as explicit nulls so clients can bind them directly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationInfo {
    pub current: u32,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_number: Option<u32>,
    pub next_number: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionNavigation {
    pub question: QuestionRecord,
    pub navigation: NavigationInfo,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NavigateQuestionsError {
    #[error("number must be a positive integer")]
    InvalidNumber,

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Question not found")]
    QuestionNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait NavigateQuestionsUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: &str,
        number: u32,
    ) -> Result<QuestionNavigation, NavigateQuestionsError>;
}
