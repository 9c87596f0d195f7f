use std::sync::Arc;

use crate::question::application::ports::incoming::use_cases::{
    CreateQuestionUseCase, DeleteQuestionUseCase, GetQuestionUseCase, GetQuestionsByTopicUseCase,
    GetQuestionsUseCase, NavigateQuestionsUseCase, QuestionCountsUseCase, UpdateQuestionUseCase,
};

/// Question use cases wired into the application state.
#[derive(Clone)]
pub struct QuestionUseCases {
    pub create: Arc<dyn CreateQuestionUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetQuestionsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetQuestionUseCase + Send + Sync>,
    pub get_by_topic: Arc<dyn GetQuestionsByTopicUseCase + Send + Sync>,
    pub navigate: Arc<dyn NavigateQuestionsUseCase + Send + Sync>,
    pub counts_by_topic: Arc<dyn QuestionCountsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateQuestionUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteQuestionUseCase + Send + Sync>,
}
