mod user_repository;

pub use user_repository::{
    CreateUserData, UpdateUserData, UserRecord, UserRepository, UserRepositoryError,
};
