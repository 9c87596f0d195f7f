//! Shared in-memory repository mocks for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::question::application::ports::outgoing::{
    CreateQuestionData, QuestionRecord, QuestionRepository, QuestionRepositoryError,
    UpdateQuestionData,
};
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicRecord, TopicRepository, TopicRepositoryError, UpdateTopicData,
};

fn normalized(text: &str) -> String {
    text.trim().to_lowercase()
}

// ──────────────────────────────────────────────────────────
// Topic repository mock: a fixed set of known topic ids
// ──────────────────────────────────────────────────────────

pub struct MockTopicRepository {
    ids: Vec<String>,
}

impl MockTopicRepository {
    pub fn with_topic(id: &str) -> Self {
        Self::with_topics(&[id])
    }

    pub fn with_topics(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    fn record(id: &str) -> TopicRecord {
        TopicRecord {
            id: id.to_string(),
            name: format!("Topic {id}"),
            description: "A description long enough".to_string(),
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }
}

#[async_trait]
impl TopicRepository for MockTopicRepository {
    async fn create(&self, _data: CreateTopicData) -> Result<TopicRecord, TopicRepositoryError> {
        unimplemented!("not used by question service tests")
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TopicRecord>, TopicRepositoryError> {
        Ok(self
            .ids
            .iter()
            .find(|known| known.as_str() == id)
            .map(|id| Self::record(id)))
    }

    async fn find_all(&self) -> Result<Vec<TopicRecord>, TopicRepositoryError> {
        Ok(self.ids.iter().map(|id| Self::record(id)).collect())
    }

    async fn update(
        &self,
        _id: &str,
        _data: UpdateTopicData,
    ) -> Result<Option<TopicRecord>, TopicRepositoryError> {
        unimplemented!("not used by question service tests")
    }

    async fn delete(&self, _id: &str) -> Result<bool, TopicRepositoryError> {
        unimplemented!("not used by question service tests")
    }
}

// ──────────────────────────────────────────────────────────
// Question repository mock: full trait semantics over a Vec
// ──────────────────────────────────────────────────────────

pub struct MockQuestionRepository {
    questions: Mutex<Vec<QuestionRecord>>,
}

impl MockQuestionRepository {
    pub fn empty() -> Self {
        Self::with_questions(vec![])
    }

    pub fn with_questions(questions: Vec<QuestionRecord>) -> Self {
        Self {
            questions: Mutex::new(questions),
        }
    }
}

#[async_trait]
impl QuestionRepository for MockQuestionRepository {
    async fn create(
        &self,
        data: CreateQuestionData,
    ) -> Result<QuestionRecord, QuestionRepositoryError> {
        let mut questions = self.questions.lock().unwrap();
        let now = Utc::now();
        let record = QuestionRecord {
            id: format!("generated-{}", questions.len() + 1),
            topic_id: data.topic_id,
            number: data.number,
            correct_answers: data.correct_answers,
            locales: data.locales,
            created_at: Some(now),
            updated_at: Some(now),
        };
        questions.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        let questions = self.questions.lock().unwrap();
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<QuestionRecord>, QuestionRepositoryError> {
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn find_by_topic_id(
        &self,
        topic_id: &str,
    ) -> Result<Vec<QuestionRecord>, QuestionRepositoryError> {
        let questions = self.questions.lock().unwrap();
        Ok(questions
            .iter()
            .filter(|q| q.topic_id == topic_id)
            .cloned()
            .collect())
    }

    async fn find_by_topic_and_number(
        &self,
        topic_id: &str,
        number: u32,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        let questions = self.questions.lock().unwrap();
        Ok(questions
            .iter()
            .find(|q| q.topic_id == topic_id && q.number == number)
            .cloned())
    }

    async fn exists_by_topic_and_number(
        &self,
        topic_id: &str,
        number: u32,
        exclude_id: Option<&str>,
    ) -> Result<bool, QuestionRepositoryError> {
        let questions = self.questions.lock().unwrap();
        Ok(questions.iter().any(|q| {
            q.topic_id == topic_id && q.number == number && exclude_id != Some(q.id.as_str())
        }))
    }

    async fn find_by_english_question(
        &self,
        topic_id: &str,
        text: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        let wanted = normalized(text);
        let questions = self.questions.lock().unwrap();
        Ok(questions
            .iter()
            .find(|q| {
                q.topic_id == topic_id
                    && exclude_id != Some(q.id.as_str())
                    && normalized(&q.locales.en.question) == wanted
            })
            .cloned())
    }

    async fn find_by_spanish_question(
        &self,
        topic_id: &str,
        text: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        let wanted = normalized(text);
        let questions = self.questions.lock().unwrap();
        Ok(questions
            .iter()
            .find(|q| {
                q.topic_id == topic_id
                    && exclude_id != Some(q.id.as_str())
                    && normalized(&q.locales.es.question) == wanted
            })
            .cloned())
    }

    async fn update(
        &self,
        id: &str,
        data: UpdateQuestionData,
    ) -> Result<Option<QuestionRecord>, QuestionRepositoryError> {
        let mut questions = self.questions.lock().unwrap();
        let Some(record) = questions.iter_mut().find(|q| q.id == id) else {
            return Ok(None);
        };

        if let Some(topic_id) = data.topic_id {
            record.topic_id = topic_id;
        }
        if let Some(number) = data.number {
            record.number = number;
        }
        if let Some(correct_answers) = data.correct_answers {
            record.correct_answers = correct_answers;
        }
        if let Some(locales) = data.locales {
            record.locales = locales;
        }
        record.updated_at = Some(Utc::now());

        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, QuestionRepositoryError> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() < before)
    }
}
