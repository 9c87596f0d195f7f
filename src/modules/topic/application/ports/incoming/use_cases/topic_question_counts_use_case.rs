use async_trait::async_trait;
use serde::Serialize;

use crate::topic::application::ports::outgoing::TopicRecord;

#[derive(Debug, Clone, Serialize)]
pub struct TopicWithQuestionCount {
    #[serde(flatten)]
    pub topic: TopicRecord,
    pub questions_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicQuestionCounts {
    pub topics: Vec<TopicWithQuestionCount>,
    pub total_topics: usize,
    pub total_questions: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQuestionCountsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait TopicQuestionCountsUseCase: Send + Sync {
    async fn execute(&self) -> Result<TopicQuestionCounts, TopicQuestionCountsError>;
}
