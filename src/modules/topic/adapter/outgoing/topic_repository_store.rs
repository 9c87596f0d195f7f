use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::store::{timestamp::normalize_timestamp, DocumentFields, DocumentStore, StoredDocument};
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicRecord, TopicRepository, TopicRepositoryError, UpdateTopicData,
};

const COLLECTION: &str = "topics";

#[derive(Clone)]
pub struct TopicStoreRepository {
    store: Arc<dyn DocumentStore>,
}

impl TopicStoreRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn to_record(doc: StoredDocument) -> TopicRecord {
        TopicRecord {
            created_at: normalize_timestamp(doc.fields.get("createdAt")),
            updated_at: normalize_timestamp(doc.fields.get("updatedAt")),
            name: doc
                .fields
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            description: doc
                .fields
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            image_url: doc
                .fields
                .get("image_url")
                .and_then(Value::as_str)
                .map(str::to_string),
            id: doc.id,
        }
    }
}

#[async_trait]
impl TopicRepository for TopicStoreRepository {
    async fn create(&self, data: CreateTopicData) -> Result<TopicRecord, TopicRepositoryError> {
        let now = Utc::now();

        let mut fields = DocumentFields::new();
        fields.insert("name".to_string(), Value::String(data.name));
        fields.insert("description".to_string(), Value::String(data.description));
        if let Some(image_url) = data.image_url {
            fields.insert("image_url".to_string(), Value::String(image_url));
        }
        fields.insert("createdAt".to_string(), Value::String(now.to_rfc3339()));
        fields.insert("updatedAt".to_string(), Value::String(now.to_rfc3339()));

        let doc = self
            .store
            .insert(COLLECTION, fields)
            .await
            .map_err(|e| TopicRepositoryError::StoreError(e.to_string()))?;

        Ok(Self::to_record(doc))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TopicRecord>, TopicRepositoryError> {
        let doc = self
            .store
            .get(COLLECTION, id)
            .await
            .map_err(|e| TopicRepositoryError::StoreError(e.to_string()))?;

        Ok(doc.map(Self::to_record))
    }

    async fn find_all(&self) -> Result<Vec<TopicRecord>, TopicRepositoryError> {
        let docs = self
            .store
            .list(COLLECTION)
            .await
            .map_err(|e| TopicRepositoryError::StoreError(e.to_string()))?;

        Ok(docs.into_iter().map(Self::to_record).collect())
    }

    async fn update(
        &self,
        id: &str,
        data: UpdateTopicData,
    ) -> Result<Option<TopicRecord>, TopicRepositoryError> {
        // Absent fields are dropped before the write; the store merges the
        // rest into the existing document.
        let mut fields = DocumentFields::new();
        if let Some(name) = data.name {
            fields.insert("name".to_string(), Value::String(name));
        }
        if let Some(description) = data.description {
            fields.insert("description".to_string(), Value::String(description));
        }
        if let Some(image_url) = data.image_url {
            fields.insert("image_url".to_string(), Value::String(image_url));
        }
        fields.insert(
            "updatedAt".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let updated = self
            .store
            .update(COLLECTION, id, fields)
            .await
            .map_err(|e| TopicRepositoryError::StoreError(e.to_string()))?;
        if !updated {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<bool, TopicRepositoryError> {
        self.store
            .delete(COLLECTION, id)
            .await
            .map_err(|e| TopicRepositoryError::StoreError(e.to_string()))
    }
}
