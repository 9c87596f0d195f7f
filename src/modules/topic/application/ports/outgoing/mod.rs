mod topic_repository;

pub use topic_repository::{
    CreateTopicData, TopicRecord, TopicRepository, TopicRepositoryError, UpdateTopicData,
};
