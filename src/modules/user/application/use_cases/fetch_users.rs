use tracing::info;

use crate::user::application::ports::outgoing::{UserRecord, UserRepository};

#[derive(Debug, Clone)]
pub enum FetchUsersError {
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IFetchUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserRecord>, FetchUsersError>;
}

#[derive(Debug, Clone)]
pub struct FetchUsersUseCase<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> FetchUsersUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IFetchUsersUseCase for FetchUsersUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<UserRecord>, FetchUsersError> {
        info!("Fetching all users");

        self.repository
            .find_all()
            .await
            .map_err(|e| FetchUsersError::RepositoryError(e.to_string()))
    }
}
