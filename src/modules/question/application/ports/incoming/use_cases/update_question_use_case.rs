use async_trait::async_trait;

use crate::question::application::domain::{
    entities::{Locale, QuestionLocales},
    validation::{validate_cross_locale_option_ids, validate_locales, QuestionValidationError},
};
use crate::question::application::ports::outgoing::QuestionRecord;

//
// ──────────────────────────────────────────────────────────
// Update Question Command (partial; absent fields stay untouched)
// ──────────────────────────────────────────────────────────
//

// Pure checks on the provided fields only. Answer references are validated
// in the service against the effective (new-or-existing) option set, so
// the cross-locale invariants hold after every write.
#[derive(Debug, Clone)]
pub struct UpdateQuestionCommand {
    topic_id: Option<String>,
    number: Option<u32>,
    correct_answers: Option<Vec<u32>>,
    locales: Option<QuestionLocales>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateQuestionCommandError {
    #[error("number must be a positive integer")]
    NumberNotPositive,

    #[error(transparent)]
    Validation(#[from] QuestionValidationError),
}

impl UpdateQuestionCommand {
    pub fn new(
        topic_id: Option<String>,
        number: Option<u32>,
        correct_answers: Option<Vec<u32>>,
        locales: Option<QuestionLocales>,
    ) -> Result<Self, UpdateQuestionCommandError> {
        if number == Some(0) {
            return Err(UpdateQuestionCommandError::NumberNotPositive);
        }

        if let Some(locales) = &locales {
            validate_locales(locales)?;
            validate_cross_locale_option_ids(&locales.en.options, &locales.es.options)?;
        }

        Ok(Self {
            topic_id,
            number,
            correct_answers,
            locales,
        })
    }

    pub fn topic_id(&self) -> Option<&String> {
        self.topic_id.as_ref()
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn correct_answers(&self) -> Option<&Vec<u32>> {
        self.correct_answers.as_ref()
    }

    pub fn locales(&self) -> Option<&QuestionLocales> {
        self.locales.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateQuestionError {
    #[error("Question not found")]
    QuestionNotFound,

    #[error("The specified topic does not exist")]
    TopicNotFound,

    #[error("A question with that number already exists in the specified topic")]
    DuplicateNumber,

    #[error("A question with the same {locale} text already exists in the specified topic")]
    DuplicateQuestionText {
        locale: Locale,
        conflicting: Box<QuestionRecord>,
    },

    #[error(transparent)]
    Validation(QuestionValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateQuestionUseCase: Send + Sync {
    async fn execute(
        &self,
        question_id: &str,
        command: UpdateQuestionCommand,
    ) -> Result<QuestionRecord, UpdateQuestionError>;
}
