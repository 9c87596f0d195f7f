use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicRecord;

//
// ──────────────────────────────────────────────────────────
// Update Topic Command (partial; absent fields stay untouched)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    name: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateTopicCommandError {
    #[error("Name must be at least 3 characters long")]
    NameTooShort,

    #[error("Description must be at least 10 characters long")]
    DescriptionTooShort,
}

impl UpdateTopicCommand {
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        image_url: Option<String>,
    ) -> Result<Self, UpdateTopicCommandError> {
        let name = name.map(|n| n.trim().to_string());
        let description = description.map(|d| d.trim().to_string());

        if let Some(name) = &name {
            if name.chars().count() < 3 {
                return Err(UpdateTopicCommandError::NameTooShort);
            }
        }

        if let Some(description) = &description {
            if description.chars().count() < 10 {
                return Err(UpdateTopicCommandError::DescriptionTooShort);
            }
        }

        Ok(Self {
            name,
            description,
            image_url,
        })
    }

    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
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
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("A topic with that name already exists")]
    DuplicateName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: &str,
        command: UpdateTopicCommand,
    ) -> Result<TopicRecord, UpdateTopicError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_pass_validation() {
        let command = UpdateTopicCommand::new(None, None, None).unwrap();

        assert!(command.name().is_none());
        assert!(command.description().is_none());
        assert!(command.image_url().is_none());
    }

    #[test]
    fn provided_fields_are_validated() {
        assert!(matches!(
            UpdateTopicCommand::new(Some("ab".to_string()), None, None),
            Err(UpdateTopicCommandError::NameTooShort)
        ));
        assert!(matches!(
            UpdateTopicCommand::new(None, Some("short".to_string()), None),
            Err(UpdateTopicCommandError::DescriptionTooShort)
        ));
    }
}
