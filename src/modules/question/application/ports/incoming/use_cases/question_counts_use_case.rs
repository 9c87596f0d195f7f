use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TopicQuestionCountSummary {
    pub topic_id: String,
    pub topic_name: String,
    pub topic_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_image_url: Option<String>,
    pub questions_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionCounts {
    pub topics: Vec<TopicQuestionCountSummary>,
    pub total_topics: usize,
    pub total_questions: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum QuestionCountsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait QuestionCountsUseCase: Send + Sync {
    async fn execute(&self) -> Result<QuestionCounts, QuestionCountsError>;
}
