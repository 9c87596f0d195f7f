use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::question::application::domain::entities::QuestionLocales;

// Unified output DTO for all question operations that return question data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub topic_id: String,
    pub number: u32,
    pub correct_answers: Vec<u32>,
    pub locales: QuestionLocales,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CreateQuestionData {
    pub topic_id: String,
    pub number: u32,
    pub correct_answers: Vec<u32>,
    pub locales: QuestionLocales,
}

// Partial update: `None` fields are dropped before the write and left
// untouched in the store.
#[derive(Debug, Clone, Default)]
pub struct UpdateQuestionData {
    pub topic_id: Option<String>,
    pub number: Option<u32>,
    pub correct_answers: Option<Vec<u32>>,
    pub locales: Option<QuestionLocales>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum QuestionRepositoryError {
    #[error("store error: {0}")]
    StoreError(String),

    #[error("malformed document {id}: {reason}")]
    MalformedDocument { id: String, reason: String },
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateQuestionData,
    ) -> Result<QuestionRecord, QuestionRepositoryError>;

    async fn find_by_id(&self, id: &str)
        -> Result<Option<QuestionRecord>, QuestionRepositoryError>;

    async fn find_all(&self) -> Result<Vec<QuestionRecord>, QuestionRepositoryError>;

    async fn find_by_topic_id(
        &self,
        topic_id: &str,
    ) -> Result<Vec<QuestionRecord>, QuestionRepositoryError>;

    async fn find_by_topic_and_number(
        &self,
        topic_id: &str,
        number: u32,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError>;

    /// Equality query on `(topic_id, number)`, optionally excluding the
    /// record being updated.
    async fn exists_by_topic_and_number(
        &self,
        topic_id: &str,
        number: u32,
        exclude_id: Option<&str>,
    ) -> Result<bool, QuestionRepositoryError>;

    /// Trimmed, case-insensitive match on the English question text within
    /// a topic. Returns the full conflicting record for the error payload.
    async fn find_by_english_question(
        &self,
        topic_id: &str,
        text: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError>;

    /// Spanish counterpart of [`find_by_english_question`].
    async fn find_by_spanish_question(
        &self,
        topic_id: &str,
        text: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError>;

    async fn update(
        &self,
        id: &str,
        data: UpdateQuestionData,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError>;

    async fn delete(&self, id: &str) -> Result<bool, QuestionRepositoryError>;
}
