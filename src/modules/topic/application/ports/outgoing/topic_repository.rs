use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Unified output DTO for all topic operations that return topic data.
// Timestamps are normalized on every read; they are absent only when the
// stored document predates timestamping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// Input DTO for creating a topic
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

// Partial update: `None` fields are dropped before the write and left
// untouched in the store.
#[derive(Debug, Clone, Default)]
pub struct UpdateTopicData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create(&self, data: CreateTopicData) -> Result<TopicRecord, TopicRepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<TopicRecord>, TopicRepositoryError>;

    async fn find_all(&self) -> Result<Vec<TopicRecord>, TopicRepositoryError>;

    async fn update(
        &self,
        id: &str,
        data: UpdateTopicData,
    ) -> Result<Option<TopicRecord>, TopicRepositoryError>;

    async fn delete(&self, id: &str) -> Result<bool, TopicRepositoryError>;
}
