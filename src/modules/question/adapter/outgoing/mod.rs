mod question_repository_store;

pub use question_repository_store::QuestionStoreRepository;
