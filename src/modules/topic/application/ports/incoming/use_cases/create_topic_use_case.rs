use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicRecord;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    name: String,
    description: String,
    image_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Name must be at least 3 characters long")]
    NameTooShort,

    #[error("Description must be at least 10 characters long")]
    DescriptionTooShort,
}

impl CreateTopicCommand {
    pub fn new(
        name: String,
        description: String,
        image_url: Option<String>,
    ) -> Result<Self, CreateTopicCommandError> {
        let name = name.trim();
        let description = description.trim();

        if name.chars().count() < 3 {
            return Err(CreateTopicCommandError::NameTooShort);
        }

        if description.chars().count() < 10 {
            return Err(CreateTopicCommandError::DescriptionTooShort);
        }

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            image_url,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> Option<&String> {
        self.image_url.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("A topic with that name already exists")]
    DuplicateName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError>;
}
