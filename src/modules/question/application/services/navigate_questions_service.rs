use async_trait::async_trait;
use tracing::info;

use crate::question::application::ports::{
    incoming::use_cases::{
        NavigateQuestionsError, NavigateQuestionsUseCase, NavigationInfo, QuestionNavigation,
    },
    outgoing::QuestionRepository,
};
use crate::topic::application::ports::outgoing::TopicRepository;

#[derive(Debug, Clone)]
pub struct NavigateQuestionsService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    question_repository: Q,
    topic_repository: T,
}

impl<Q, T> NavigateQuestionsService<Q, T>
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
impl<Q, T> NavigateQuestionsUseCase for NavigateQuestionsService<Q, T>
where
    Q: QuestionRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: &str,
        number: u32,
    ) -> Result<QuestionNavigation, NavigateQuestionsError> {
        if number == 0 {
            return Err(NavigateQuestionsError::InvalidNumber);
        }

        info!(topic_id, number, "Navigating to question");

        let topic = self
            .topic_repository
            .find_by_id(topic_id)
            .await
            .map_err(|e| NavigateQuestionsError::RepositoryError(e.to_string()))?;
        if topic.is_none() {
            return Err(NavigateQuestionsError::TopicNotFound);
        }

        let question = self
            .question_repository
            .find_by_topic_and_number(topic_id, number)
            .await
            .map_err(|e| NavigateQuestionsError::RepositoryError(e.to_string()))?
            .ok_or(NavigateQuestionsError::QuestionNotFound)?;

        let total = self
            .question_repository
            .find_by_topic_id(topic_id)
            .await
            .map_err(|e| NavigateQuestionsError::RepositoryError(e.to_string()))?
            .len();

        let has_previous = number > 1;
        let has_next = (number as usize) < total;

        Ok(QuestionNavigation {
            question,
            navigation: NavigationInfo {
                current: number,
                total,
                has_previous,
                has_next,
                previous_number: has_previous.then(|| number - 1),
                next_number: has_next.then(|| number + 1),
            },
        })
    }
}
