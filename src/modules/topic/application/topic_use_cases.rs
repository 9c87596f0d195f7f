use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicUseCase, GetTopicsUseCase,
    TopicQuestionCountsUseCase, UpdateTopicUseCase,
};

/// Topic use cases wired into the application state.
#[derive(Clone)]
pub struct TopicUseCases {
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub question_counts: Arc<dyn TopicQuestionCountsUseCase + Send + Sync>,
}
