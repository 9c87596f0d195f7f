use tracing::info;

use crate::user::application::ports::outgoing::{
    CreateUserData, UserRecord, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum CreateUserError {
    EmailTooShort,
    NameTooShort,
    UserAlreadyExists,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, email: String, name: String) -> Result<UserRecord, CreateUserError>;
}

#[derive(Debug, Clone)]
pub struct CreateUserUseCase<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> ICreateUserUseCase for CreateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, email: String, name: String) -> Result<UserRecord, CreateUserError> {
        let email = email.trim().to_string();
        let name = name.trim().to_string();

        if email.chars().count() < 5 {
            return Err(CreateUserError::EmailTooShort);
        }

        if name.chars().count() < 2 {
            return Err(CreateUserError::NameTooShort);
        }

        info!(email = %email, "Creating user");

        let existing = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|err| match err {
                UserRepositoryError::StoreError(msg) => CreateUserError::RepositoryError(msg),
            })?;
        if existing.is_some() {
            return Err(CreateUserError::UserAlreadyExists);
        }

        self.repository
            .create(CreateUserData { email, name })
            .await
            .map_err(|err| match err {
                UserRepositoryError::StoreError(msg) => CreateUserError::RepositoryError(msg),
            })
    }
}
