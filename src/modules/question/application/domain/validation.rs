//! Consistency rules for question payloads.
//!
//! The single validation module used by both the create and the update
//! paths. All functions are pure, short-circuit on the first violation,
//! and check in order: presence, per-field shape, per-option shape and
//! uniqueness. Uniqueness rules that need a store round trip (question
//! text, sequence number, topic name) live in the services.

use std::collections::BTreeSet;

use super::entities::{Locale, QuestionLocales, QuestionOption};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionValidationError {
    #[error("Question text in {locale} must not be empty")]
    EmptyQuestionText { locale: Locale },

    #[error("Options in {locale} must not be empty")]
    EmptyOptions { locale: Locale },

    #[error("Option id in {locale} must be a positive integer")]
    OptionIdNotPositive { locale: Locale },

    #[error("Option text for id {option_id} in {locale} must not be empty")]
    EmptyOptionText { locale: Locale, option_id: u32 },

    #[error("Duplicate option id {option_id} in {locale}")]
    DuplicateOptionId { locale: Locale, option_id: u32 },

    #[error("Explanation in {locale} must not be empty")]
    EmptyExplanation { locale: Locale },

    #[error("Options in en and es must have equal count")]
    OptionCountMismatch,

    #[error("Option ids must match between locales: id {option_id} is missing in es")]
    OptionIdMismatch { option_id: u32 },

    #[error("correct_answers must be a non-empty array")]
    EmptyCorrectAnswers,

    #[error("Correct answer {answer} does not reference a valid option id. Valid ids: {}", format_ids(.valid_ids))]
    UnknownAnswerReference { answer: u32, valid_ids: Vec<u32> },
}

fn format_ids(ids: &[u32]) -> String {
    let joined = ids
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Per-locale structural checks: non-empty question text, a non-empty
/// option list with positive unique ids and non-empty texts, and a
/// non-empty explanation. The first violation wins.
pub fn validate_locales(locales: &QuestionLocales) -> Result<(), QuestionValidationError> {
    for locale in Locale::ALL {
        let content = locales.locale(locale);

        if content.question.trim().is_empty() {
            return Err(QuestionValidationError::EmptyQuestionText { locale });
        }

        if content.options.is_empty() {
            return Err(QuestionValidationError::EmptyOptions { locale });
        }

        let mut seen = BTreeSet::new();
        for option in &content.options {
            if option.id == 0 {
                return Err(QuestionValidationError::OptionIdNotPositive { locale });
            }
            if option.text.trim().is_empty() {
                return Err(QuestionValidationError::EmptyOptionText {
                    locale,
                    option_id: option.id,
                });
            }
            if !seen.insert(option.id) {
                return Err(QuestionValidationError::DuplicateOptionId {
                    locale,
                    option_id: option.id,
                });
            }
        }

        if content.explanation.trim().is_empty() {
            return Err(QuestionValidationError::EmptyExplanation { locale });
        }
    }

    Ok(())
}

/// Invariant: the en and es option-id sets must be equal. Cardinality is
/// checked first, then en ⊆ es, which together imply set equality.
pub fn validate_cross_locale_option_ids(
    en_options: &[QuestionOption],
    es_options: &[QuestionOption],
) -> Result<(), QuestionValidationError> {
    if en_options.len() != es_options.len() {
        return Err(QuestionValidationError::OptionCountMismatch);
    }

    let es_ids = option_id_set(es_options);
    for option in en_options {
        if !es_ids.contains(&option.id) {
            return Err(QuestionValidationError::OptionIdMismatch {
                option_id: option.id,
            });
        }
    }

    Ok(())
}

/// Invariant: every correct answer references an existing option id.
/// Answers are id references, never indices into the option array.
pub fn validate_answer_references(
    correct_answers: &[u32],
    valid_ids: &BTreeSet<u32>,
) -> Result<(), QuestionValidationError> {
    if correct_answers.is_empty() {
        return Err(QuestionValidationError::EmptyCorrectAnswers);
    }

    for answer in correct_answers {
        if !valid_ids.contains(answer) {
            return Err(QuestionValidationError::UnknownAnswerReference {
                answer: *answer,
                valid_ids: valid_ids.iter().copied().collect(),
            });
        }
    }

    Ok(())
}

pub fn option_id_set(options: &[QuestionOption]) -> BTreeSet<u32> {
    options.iter().map(|option| option.id).collect()
}
