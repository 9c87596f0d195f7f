use async_trait::async_trait;
use tracing::info;

use crate::question::application::ports::outgoing::QuestionRepository;
use crate::topic::application::ports::{
    incoming::use_cases::{
        TopicQuestionCounts, TopicQuestionCountsError, TopicQuestionCountsUseCase,
        TopicWithQuestionCount,
    },
    outgoing::TopicRepository,
};

#[derive(Debug, Clone)]
pub struct TopicQuestionCountsService<T, Q>
where
    T: TopicRepository + Send + Sync,
    Q: QuestionRepository + Send + Sync,
{
    topic_repository: T,
    question_repository: Q,
}

impl<T, Q> TopicQuestionCountsService<T, Q>
where
    T: TopicRepository + Send + Sync,
    Q: QuestionRepository + Send + Sync,
{
    pub fn new(topic_repository: T, question_repository: Q) -> Self {
        Self {
            topic_repository,
            question_repository,
        }
    }
}

#[async_trait]
impl<T, Q> TopicQuestionCountsUseCase for TopicQuestionCountsService<T, Q>
where
    T: TopicRepository + Send + Sync,
    Q: QuestionRepository + Send + Sync,
{
    async fn execute(&self) -> Result<TopicQuestionCounts, TopicQuestionCountsError> {
        let topics = self
            .topic_repository
            .find_all()
            .await
            .map_err(|e| TopicQuestionCountsError::RepositoryError(e.to_string()))?;

        let mut with_counts = Vec::with_capacity(topics.len());
        for topic in topics {
            let questions = self
                .question_repository
                .find_by_topic_id(&topic.id)
                .await
                .map_err(|e| TopicQuestionCountsError::RepositoryError(e.to_string()))?;

            with_counts.push(TopicWithQuestionCount {
                topic,
                questions_count: questions.len(),
            });
        }

        let total_topics = with_counts.len();
        let total_questions = with_counts.iter().map(|t| t.questions_count).sum();

        info!(total_topics, total_questions, "Computed topic question counts");

        Ok(TopicQuestionCounts {
            topics: with_counts,
            total_topics,
            total_questions,
        })
    }
}
