mod create_topic_use_case;
mod delete_topic_use_case;
mod get_topic_use_case;
mod get_topics_use_case;
mod topic_question_counts_use_case;
mod update_topic_use_case;

pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError, CreateTopicUseCase,
};
pub use delete_topic_use_case::{DeleteTopicError, DeleteTopicUseCase};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use topic_question_counts_use_case::{
    TopicQuestionCounts, TopicQuestionCountsError, TopicQuestionCountsUseCase,
    TopicWithQuestionCount,
};
pub use update_topic_use_case::{
    UpdateTopicCommand, UpdateTopicCommandError, UpdateTopicError, UpdateTopicUseCase,
};
