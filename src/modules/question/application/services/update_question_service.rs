use async_trait::async_trait;
use tracing::info;

use crate::question::application::domain::entities::Locale;
use crate::question::application::domain::validation::{
    option_id_set, validate_answer_references,
};
use crate::question::application::ports::{
    incoming::use_cases::{UpdateQuestionCommand, UpdateQuestionError, UpdateQuestionUseCase},
    outgoing::{QuestionRecord, QuestionRepository, UpdateQuestionData},
};
use crate::topic::application::ports::outgoing::TopicRepository;

#[derive(Debug, Clone)]
pub struct UpdateQuestionService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    question_repository: Q,
    topic_repository: T,
}

impl<Q, T> UpdateQuestionService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    pub fn new(question_repository: Q, topic_repository: T) -> Self {
        Self {
            question_repository,
            topic_repository,
        }
    }
}

#[async_trait]
impl<Q, T> UpdateQuestionUseCase for UpdateQuestionService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        question_id: &str,
        command: UpdateQuestionCommand,
    ) -> Result<QuestionRecord, UpdateQuestionError> {
        info!(question_id, "Updating question");

        let existing = self
            .question_repository
            .find_by_id(question_id)
            .await
            .map_err(|e| UpdateQuestionError::RepositoryError(e.to_string()))?
            .ok_or(UpdateQuestionError::QuestionNotFound)?;

        // Uniqueness checks run against the topic the question will belong
        // to after the write.
        let target_topic = command
            .topic_id()
            .cloned()
            .unwrap_or_else(|| existing.topic_id.clone());

        if command.topic_id().is_some() {
            let topic = self
                .topic_repository
                .find_by_id(&target_topic)
                .await
                .map_err(|e| UpdateQuestionError::RepositoryError(e.to_string()))?;
            if topic.is_none() {
                return Err(UpdateQuestionError::TopicNotFound);
            }
        }

        if let Some(number) = command.number() {
            let number_taken = self
                .question_repository
                .exists_by_topic_and_number(&target_topic, number, Some(question_id))
                .await
                .map_err(|e| UpdateQuestionError::RepositoryError(e.to_string()))?;
            if number_taken {
                return Err(UpdateQuestionError::DuplicateNumber);
            }
        }

        // Text uniqueness must hold in the target topic whether the text
        // changed, the topic changed, or both.
        if command.locales().is_some() || command.topic_id().is_some() {
            let effective_locales = command.locales().unwrap_or(&existing.locales);

            if let Some(conflicting) = self
                .question_repository
                .find_by_english_question(
                    &target_topic,
                    &effective_locales.en.question,
                    Some(question_id),
                )
                .await
                .map_err(|e| UpdateQuestionError::RepositoryError(e.to_string()))?
            {
                return Err(UpdateQuestionError::DuplicateQuestionText {
                    locale: Locale::En,
                    conflicting: Box::new(conflicting),
                });
            }

            if let Some(conflicting) = self
                .question_repository
                .find_by_spanish_question(
                    &target_topic,
                    &effective_locales.es.question,
                    Some(question_id),
                )
                .await
                .map_err(|e| UpdateQuestionError::RepositoryError(e.to_string()))?
            {
                return Err(UpdateQuestionError::DuplicateQuestionText {
                    locale: Locale::Es,
                    conflicting: Box::new(conflicting),
                });
            }
        }

        // Answer references are checked against the state the record will
        // have after the write, so the invariant survives partial updates.
        if command.correct_answers().is_some() || command.locales().is_some() {
            let effective_answers = command
                .correct_answers()
                .map(Vec::as_slice)
                .unwrap_or(&existing.correct_answers);
            let effective_options = command
                .locales()
                .map(|locales| &locales.en.options)
                .unwrap_or(&existing.locales.en.options);

            validate_answer_references(effective_answers, &option_id_set(effective_options))
                .map_err(UpdateQuestionError::Validation)?;
        }

        let data = UpdateQuestionData {
            topic_id: command.topic_id().cloned(),
            number: command.number(),
            correct_answers: command.correct_answers().cloned(),
            locales: command.locales().cloned(),
        };

        self.question_repository
            .update(question_id, data)
            .await
            .map_err(|e| UpdateQuestionError::RepositoryError(e.to_string()))?
            .ok_or(UpdateQuestionError::QuestionNotFound)
    }
}
