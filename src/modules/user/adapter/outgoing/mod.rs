mod user_repository_store;

pub use user_repository_store::UserStoreRepository;
