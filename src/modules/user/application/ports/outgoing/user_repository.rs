use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, data: CreateUserData) -> Result<UserRecord, UserRepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, UserRepositoryError>;

    async fn find_by_email(&self, email: &str)
        -> Result<Option<UserRecord>, UserRepositoryError>;

    async fn find_all(&self) -> Result<Vec<UserRecord>, UserRepositoryError>;

    async fn update(
        &self,
        id: &str,
        data: UpdateUserData,
    ) -> Result<Option<UserRecord>, UserRepositoryError>;

    async fn delete(&self, id: &str) -> Result<bool, UserRepositoryError>;
}
