use async_trait::async_trait;

use crate::question::application::domain::{
    entities::{Locale, QuestionLocales},
    validation::{
        option_id_set, validate_answer_references, validate_cross_locale_option_ids,
        validate_locales, QuestionValidationError,
    },
};
use crate::question::application::ports::outgoing::QuestionRecord;

//
// ──────────────────────────────────────────────────────────
// Create Question Command
// ──────────────────────────────────────────────────────────
//

// Structural and cross-field validation happens here; checks that need a
// store round trip (topic existence, uniqueness) live in the service.
#[derive(Debug, Clone)]
pub struct CreateQuestionCommand {
    topic_id: String,
    number: u32,
    correct_answers: Vec<u32>,
    locales: QuestionLocales,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateQuestionCommandError {
    #[error("number must be a positive integer")]
    NumberNotPositive,

    #[error(transparent)]
    Validation(#[from] QuestionValidationError),
}

impl CreateQuestionCommand {
    pub fn new(
        topic_id: String,
        number: u32,
        correct_answers: Vec<u32>,
        locales: QuestionLocales,
    ) -> Result<Self, CreateQuestionCommandError> {
        if number == 0 {
            return Err(CreateQuestionCommandError::NumberNotPositive);
        }

        validate_locales(&locales)?;
        validate_cross_locale_option_ids(&locales.en.options, &locales.es.options)?;
        validate_answer_references(&correct_answers, &option_id_set(&locales.en.options))?;

        Ok(Self {
            topic_id,
            number,
            correct_answers,
            locales,
        })
    }

    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn correct_answers(&self) -> &[u32] {
        &self.correct_answers
    }

    pub fn locales(&self) -> &QuestionLocales {
        &self.locales
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateQuestionError {
    #[error("The specified topic does not exist")]
    TopicNotFound,

    #[error("A question with that number already exists in the specified topic")]
    DuplicateNumber,

    #[error("A question with the same {locale} text already exists in the specified topic")]
    DuplicateQuestionText {
        locale: Locale,
        conflicting: Box<QuestionRecord>,
    },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateQuestionUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateQuestionCommand,
    ) -> Result<QuestionRecord, CreateQuestionError>;
}
