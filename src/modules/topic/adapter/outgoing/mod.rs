mod topic_repository_store;

pub use topic_repository_store::TopicStoreRepository;
