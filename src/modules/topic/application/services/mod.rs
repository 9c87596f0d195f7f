mod create_topic_service;
mod delete_topic_service;
mod get_topic_service;
mod get_topics_service;
mod topic_question_counts_service;
mod update_topic_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use get_topic_service::GetTopicService;
pub use get_topics_service::GetTopicsService;
pub use topic_question_counts_service::TopicQuestionCountsService;
pub use update_topic_service::UpdateTopicService;
