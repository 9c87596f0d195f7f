use tracing::info;

use crate::user::application::ports::outgoing::UserRepository;

#[derive(Debug, Clone)]
pub enum DeleteUserError {
    UserNotFound,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<(), DeleteUserError>;
}

#[derive(Debug, Clone)]
pub struct DeleteUserUseCase<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IDeleteUserUseCase for DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<(), DeleteUserError> {
        info!(user_id, "Deleting user");

        let deleted = self
            .repository
            .delete(user_id)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?;

        if deleted {
            Ok(())
        } else {
            Err(DeleteUserError::UserNotFound)
        }
    }
}
