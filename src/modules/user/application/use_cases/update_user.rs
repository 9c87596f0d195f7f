use tracing::info;

use crate::user::application::ports::outgoing::{UpdateUserData, UserRecord, UserRepository};

#[derive(Debug, Clone)]
pub enum UpdateUserError {
    EmailTooShort,
    NameTooShort,
    UserNotFound,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: &str,
        email: Option<String>,
        name: Option<String>,
    ) -> Result<UserRecord, UpdateUserError>;
}

#[derive(Debug, Clone)]
pub struct UpdateUserUseCase<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IUpdateUserUseCase for UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: &str,
        email: Option<String>,
        name: Option<String>,
    ) -> Result<UserRecord, UpdateUserError> {
        let email = email.map(|e| e.trim().to_string());
        let name = name.map(|n| n.trim().to_string());

        if let Some(email) = &email {
            if email.chars().count() < 5 {
                return Err(UpdateUserError::EmailTooShort);
            }
        }

        if let Some(name) = &name {
            if name.chars().count() < 2 {
                return Err(UpdateUserError::NameTooShort);
            }
        }

        info!(user_id, "Updating user");

        let existing = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(|e| UpdateUserError::RepositoryError(e.to_string()))?;
        if existing.is_none() {
            return Err(UpdateUserError::UserNotFound);
        }

        self.repository
            .update(user_id, UpdateUserData { email, name })
            .await
            .map_err(|e| UpdateUserError::RepositoryError(e.to_string()))?
            .ok_or(UpdateUserError::UserNotFound)
    }
}
