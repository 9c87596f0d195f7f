use async_trait::async_trait;
use tracing::info;

use crate::question::application::domain::entities::Locale;
use crate::question::application::ports::{
    incoming::use_cases::{CreateQuestionCommand, CreateQuestionError, CreateQuestionUseCase},
    outgoing::{CreateQuestionData, QuestionRecord, QuestionRepository},
};
use crate::topic::application::ports::outgoing::TopicRepository;

#[derive(Debug, Clone)]
pub struct CreateQuestionService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    question_repository: Q,
    topic_repository: T,
}

impl<Q, T> CreateQuestionService<Q, T>
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
impl<Q, T> CreateQuestionUseCase for CreateQuestionService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateQuestionCommand,
    ) -> Result<QuestionRecord, CreateQuestionError> {
        info!(topic_id = command.topic_id(), number = command.number(), "Creating question");

        // Referential check: the topic must exist.
        let topic = self
            .topic_repository
            .find_by_id(command.topic_id())
            .await
            .map_err(|e| CreateQuestionError::RepositoryError(e.to_string()))?;
        if topic.is_none() {
            return Err(CreateQuestionError::TopicNotFound);
        }

        // Sequence number is unique within the topic.
        let number_taken = self
            .question_repository
            .exists_by_topic_and_number(command.topic_id(), command.number(), None)
            .await
            .map_err(|e| CreateQuestionError::RepositoryError(e.to_string()))?;
        if number_taken {
            return Err(CreateQuestionError::DuplicateNumber);
        }

        // Question text is unique within the topic, independently per locale.
        // The conflicting record rides along in the error payload.
        if let Some(conflicting) = self
            .question_repository
            .find_by_english_question(command.topic_id(), &command.locales().en.question, None)
            .await
            .map_err(|e| CreateQuestionError::RepositoryError(e.to_string()))?
        {
            return Err(CreateQuestionError::DuplicateQuestionText {
                locale: Locale::En,
                conflicting: Box::new(conflicting),
            });
        }

        if let Some(conflicting) = self
            .question_repository
            .find_by_spanish_question(command.topic_id(), &command.locales().es.question, None)
            .await
            .map_err(|e| CreateQuestionError::RepositoryError(e.to_string()))?
        {
            return Err(CreateQuestionError::DuplicateQuestionText {
                locale: Locale::Es,
                conflicting: Box::new(conflicting),
            });
        }

        let data = CreateQuestionData {
            topic_id: command.topic_id().to_string(),
            number: command.number(),
            correct_answers: command.correct_answers().to_vec(),
            locales: command.locales().clone(),
        };

        self.question_repository
            .create(data)
            .await
            .map_err(|e| CreateQuestionError::RepositoryError(e.to_string()))
    }
}
