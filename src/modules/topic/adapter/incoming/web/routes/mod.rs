mod create_topic;
mod delete_topic;
mod get_topic_by_id;
mod get_topics;
mod get_topics_with_question_counts;
mod update_topic;

pub use create_topic::create_topic_handler;
pub use delete_topic::delete_topic_handler;
pub use get_topic_by_id::get_topic_by_id_handler;
pub use get_topics::get_topics_handler;
pub use get_topics_with_question_counts::get_topics_with_question_counts_handler;
pub use update_topic::update_topic_handler;
