mod memory;
pub mod timestamp;

pub use memory::MemoryDocumentStore;

use async_trait::async_trait;
use serde_json::Value;

/// Field map of a document as stored, without its identifier.
pub type DocumentFields = serde_json::Map<String, Value>;

/// A document read back from the store, with its server-assigned id.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: String,
    pub fields: DocumentFields,
}

/// Equality filter on a single document field.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

impl FieldFilter {
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Collection-scoped access to the document database.
///
/// The concrete client is an external collaborator; the application only
/// sees this trait. Identifiers are assigned by the store on insert, and
/// `update` merges the given fields into the existing document, leaving
/// unspecified fields untouched.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(
        &self,
        collection: &str,
        fields: DocumentFields,
    ) -> Result<StoredDocument, StoreError>;

    async fn get(&self, collection: &str, id: &str)
        -> Result<Option<StoredDocument>, StoreError>;

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError>;

    /// Conjunction of equality filters over document fields.
    async fn query(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> Result<Vec<StoredDocument>, StoreError>;

    /// Merges `fields` into the document. Returns `false` when no document
    /// with the given id exists.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: DocumentFields,
    ) -> Result<bool, StoreError>;

    /// Returns `false` when no document with the given id exists.
    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError>;
}
