use tracing::info;

use crate::user::application::ports::outgoing::{UserRecord, UserRepository};

#[derive(Debug, Clone)]
pub enum FetchUserError {
    UserNotFound,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IFetchUserByIdUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<UserRecord, FetchUserError>;
}

#[derive(Debug, Clone)]
pub struct FetchUserByIdUseCase<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> FetchUserByIdUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IFetchUserByIdUseCase for FetchUserByIdUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<UserRecord, FetchUserError> {
        info!(user_id, "Fetching user by id");

        self.repository
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserError::RepositoryError(e.to_string()))?
            .ok_or(FetchUserError::UserNotFound)
    }
}
