use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::store::{
    timestamp::normalize_timestamp, DocumentFields, DocumentStore, FieldFilter, StoredDocument,
};
use crate::user::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserRecord, UserRepository, UserRepositoryError,
};

const COLLECTION: &str = "users";

#[derive(Clone)]
pub struct UserStoreRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserStoreRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn to_record(doc: StoredDocument) -> UserRecord {
        UserRecord {
            created_at: normalize_timestamp(doc.fields.get("createdAt")),
            updated_at: normalize_timestamp(doc.fields.get("updatedAt")),
            email: doc
                .fields
                .get("email")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            name: doc
                .fields
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            id: doc.id,
        }
    }
}

#[async_trait]
impl UserRepository for UserStoreRepository {
    async fn create(&self, data: CreateUserData) -> Result<UserRecord, UserRepositoryError> {
        let now = Utc::now();

        let mut fields = DocumentFields::new();
        fields.insert("email".to_string(), Value::String(data.email));
        fields.insert("name".to_string(), Value::String(data.name));
        fields.insert("createdAt".to_string(), Value::String(now.to_rfc3339()));
        fields.insert("updatedAt".to_string(), Value::String(now.to_rfc3339()));

        let doc = self
            .store
            .insert(COLLECTION, fields)
            .await
            .map_err(|e| UserRepositoryError::StoreError(e.to_string()))?;

        Ok(Self::to_record(doc))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, UserRepositoryError> {
        let doc = self
            .store
            .get(COLLECTION, id)
            .await
            .map_err(|e| UserRepositoryError::StoreError(e.to_string()))?;

        Ok(doc.map(Self::to_record))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, UserRepositoryError> {
        let docs = self
            .store
            .query(COLLECTION, &[FieldFilter::eq("email", email)])
            .await
            .map_err(|e| UserRepositoryError::StoreError(e.to_string()))?;

        Ok(docs.into_iter().next().map(Self::to_record))
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, UserRepositoryError> {
        let docs = self
            .store
            .list(COLLECTION)
            .await
            .map_err(|e| UserRepositoryError::StoreError(e.to_string()))?;

        Ok(docs.into_iter().map(Self::to_record).collect())
    }

    async fn update(
        &self,
        id: &str,
        data: UpdateUserData,
    ) -> Result<Option<UserRecord>, UserRepositoryError> {
        let mut fields = DocumentFields::new();
        if let Some(email) = data.email {
            fields.insert("email".to_string(), Value::String(email));
        }
        if let Some(name) = data.name {
            fields.insert("name".to_string(), Value::String(name));
        }
        fields.insert(
            "updatedAt".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let updated = self
            .store
            .update(COLLECTION, id, fields)
            .await
            .map_err(|e| UserRepositoryError::StoreError(e.to_string()))?;
        if !updated {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<bool, UserRepositoryError> {
        self.store
            .delete(COLLECTION, id)
            .await
            .map_err(|e| UserRepositoryError::StoreError(e.to_string()))
    }
}
