use async_trait::async_trait;
use tracing::info;

use crate::question::application::ports::{
    incoming::use_cases::{
        QuestionCounts, QuestionCountsError, QuestionCountsUseCase, TopicQuestionCountSummary,
    },
    outgoing::QuestionRepository,
};
use crate::topic::application::ports::outgoing::TopicRepository;

#[derive(Debug, Clone)]
pub struct QuestionCountsService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    question_repository: Q,
    topic_repository: T,
}

impl<Q, T> QuestionCountsService<Q, T>
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
impl<Q, T> QuestionCountsUseCase for QuestionCountsService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    async fn execute(&self) -> Result<QuestionCounts, QuestionCountsError> {
        let topics = self
            .topic_repository
            .find_all()
            .await
            .map_err(|e| QuestionCountsError::RepositoryError(e.to_string()))?;

        let mut summaries = Vec::with_capacity(topics.len());
        for topic in topics {
            let questions = self
                .question_repository
                .find_by_topic_id(&topic.id)
                .await
                .map_err(|e| QuestionCountsError::RepositoryError(e.to_string()))?;

            summaries.push(TopicQuestionCountSummary {
                topic_id: topic.id,
                topic_name: topic.name,
                topic_description: topic.description,
                topic_image_url: topic.image_url,
                questions_count: questions.len(),
            });
        }

        let total_topics = summaries.len();
        let total_questions = summaries.iter().map(|s| s.questions_count).sum();

        info!(total_topics, total_questions, "Computed question counts by topic");

        Ok(QuestionCounts {
            topics: summaries,
            total_topics,
            total_questions,
        })
    }
}
