use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::question::application::domain::entities::QuestionLocales;
use crate::question::application::ports::outgoing::{
    CreateQuestionData, QuestionRecord, QuestionRepository, QuestionRepositoryError,
    UpdateQuestionData,
};
use crate::store::{
    timestamp::normalize_timestamp, DocumentFields, DocumentStore, FieldFilter, StoredDocument,
};

const COLLECTION: &str = "questions";

fn normalized(text: &str) -> String {
    text.trim().to_lowercase()
}

#[derive(Clone)]
pub struct QuestionStoreRepository {
    store: Arc<dyn DocumentStore>,
}

impl QuestionStoreRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn to_record(doc: StoredDocument) -> Result<QuestionRecord, QuestionRepositoryError> {
        let malformed = |reason: String| QuestionRepositoryError::MalformedDocument {
            id: doc.id.clone(),
            reason,
        };

        let locales: QuestionLocales = doc
            .fields
            .get("locales")
            .cloned()
            .ok_or_else(|| malformed("missing locales".to_string()))
            .and_then(|value| {
                serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
            })?;

        let number = doc
            .fields
            .get("number")
            .and_then(Value::as_u64)
            .ok_or_else(|| malformed("missing or non-integer number".to_string()))?
            as u32;

        let correct_answers: Vec<u32> = doc
            .fields
            .get("correct_answers")
            .cloned()
            .ok_or_else(|| malformed("missing correct_answers".to_string()))
            .and_then(|value| {
                serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
            })?;

        Ok(QuestionRecord {
            created_at: normalize_timestamp(doc.fields.get("createdAt")),
            updated_at: normalize_timestamp(doc.fields.get("updatedAt")),
            topic_id: doc
                .fields
                .get("topic_id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            number,
            correct_answers,
            locales,
            id: doc.id,
        })
    }

    fn to_records(
        docs: Vec<StoredDocument>,
    ) -> Result<Vec<QuestionRecord>, QuestionRepositoryError> {
        docs.into_iter().map(Self::to_record).collect()
    }

    async fn find_by_question_text(
        &self,
        topic_id: &str,
        text: &str,
        exclude_id: Option<&str>,
        select: fn(&QuestionRecord) -> &str,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        // Equality queries cannot express a case-insensitive match, so the
        // topic's questions are scanned in memory.
        let questions = self.find_by_topic_id(topic_id).await?;
        let wanted = normalized(text);

        Ok(questions.into_iter().find(|question| {
            exclude_id != Some(question.id.as_str()) && normalized(select(question)) == wanted
        }))
    }
}

#[async_trait]
impl QuestionRepository for QuestionStoreRepository {
    async fn create(
        &self,
        data: CreateQuestionData,
    ) -> Result<QuestionRecord, QuestionRepositoryError> {
        let now = Utc::now();

        let locales = serde_json::to_value(&data.locales)
            .map_err(|e| QuestionRepositoryError::StoreError(e.to_string()))?;

        let mut fields = DocumentFields::new();
        fields.insert("topic_id".to_string(), Value::String(data.topic_id));
        fields.insert("number".to_string(), Value::from(data.number));
        fields.insert(
            "correct_answers".to_string(),
            Value::from(data.correct_answers),
        );
        fields.insert("locales".to_string(), locales);
        fields.insert("createdAt".to_string(), Value::String(now.to_rfc3339()));
        fields.insert("updatedAt".to_string(), Value::String(now.to_rfc3339()));

        let doc = self
            .store
            .insert(COLLECTION, fields)
            .await
            .map_err(|e| QuestionRepositoryError::StoreError(e.to_string()))?;

        Self::to_record(doc)
    }

    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        let doc = self
            .store
            .get(COLLECTION, id)
            .await
            .map_err(|e| QuestionRepositoryError::StoreError(e.to_string()))?;

        doc.map(Self::to_record).transpose()
    }

    async fn find_all(&self) -> Result<Vec<QuestionRecord>, QuestionRepositoryError> {
        let docs = self
            .store
            .list(COLLECTION)
            .await
            .map_err(|e| QuestionRepositoryError::StoreError(e.to_string()))?;

        Self::to_records(docs)
    }

    async fn find_by_topic_id(
        &self,
        topic_id: &str,
    ) -> Result<Vec<QuestionRecord>, QuestionRepositoryError> {
        let docs = self
            .store
            .query(COLLECTION, &[FieldFilter::eq("topic_id", topic_id)])
            .await
            .map_err(|e| QuestionRepositoryError::StoreError(e.to_string()))?;

        Self::to_records(docs)
    }

    async fn find_by_topic_and_number(
        &self,
        topic_id: &str,
        number: u32,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        let docs = self
            .store
            .query(
                COLLECTION,
                &[
                    FieldFilter::eq("topic_id", topic_id),
                    FieldFilter::eq("number", number),
                ],
            )
            .await
            .map_err(|e| QuestionRepositoryError::StoreError(e.to_string()))?;

        docs.into_iter().next().map(Self::to_record).transpose()
    }

    async fn exists_by_topic_and_number(
        &self,
        topic_id: &str,
        number: u32,
        exclude_id: Option<&str>,
    ) -> Result<bool, QuestionRepositoryError> {
        let docs = self
            .store
            .query(
                COLLECTION,
                &[
                    FieldFilter::eq("topic_id", topic_id),
                    FieldFilter::eq("number", number),
                ],
            )
            .await
            .map_err(|e| QuestionRepositoryError::StoreError(e.to_string()))?;

        Ok(docs
            .iter()
            .any(|doc| exclude_id != Some(doc.id.as_str())))
    }

    async fn find_by_english_question(
        &self,
        topic_id: &str,
        text: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        self.find_by_question_text(topic_id, text, exclude_id, |q| &q.locales.en.question)
            .await
    }

    async fn find_by_spanish_question(
        &self,
        topic_id: &str,
        text: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        self.find_by_question_text(topic_id, text, exclude_id, |q| &q.locales.es.question)
            .await
    }

    async fn update(
        &self,
        id: &str,
        data: UpdateQuestionData,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        // Absent fields are dropped before the write; the store merges the
        // rest into the existing document.
        let mut fields = DocumentFields::new();
        if let Some(topic_id) = data.topic_id {
            fields.insert("topic_id".to_string(), Value::String(topic_id));
        }
        if let Some(number) = data.number {
            fields.insert("number".to_string(), Value::from(number));
        }
        if let Some(correct_answers) = data.correct_answers {
            fields.insert(
                "correct_answers".to_string(),
                Value::from(correct_answers),
            );
        }
        if let Some(locales) = data.locales {
            let locales = serde_json::to_value(&locales)
                .map_err(|e| QuestionRepositoryError::StoreError(e.to_string()))?;
            fields.insert("locales".to_string(), locales);
        }
        fields.insert(
            "updatedAt".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let updated = self
            .store
            .update(COLLECTION, id, fields)
            .await
            .map_err(|e| QuestionRepositoryError::StoreError(e.to_string()))?;
        if !updated {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<bool, QuestionRepositoryError> {
        self.store
            .delete(COLLECTION, id)
            .await
            .map_err(|e| QuestionRepositoryError::StoreError(e.to_string()))
    }
}
