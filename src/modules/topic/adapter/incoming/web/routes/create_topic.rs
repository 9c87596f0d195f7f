use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{
        CreateTopicCommand, CreateTopicCommandError, CreateTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CreateTopicRequest {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/topics")]
pub async fn create_topic_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command =
        match CreateTopicCommand::new(payload.name, payload.description, payload.image_url) {
            Ok(cmd) => cmd,
            Err(err) => return map_command_error(err),
        };

    match data.topics.create.execute(command).await {
        Ok(topic) => ApiResponse::created(topic, "Topic created successfully"),
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateTopicCommandError) -> actix_web::HttpResponse {
    match err {
        CreateTopicCommandError::NameTooShort => {
            ApiResponse::bad_request("Name must be at least 3 characters long")
        }
        CreateTopicCommandError::DescriptionTooShort => {
            ApiResponse::bad_request("Description must be at least 10 characters long")
        }
    }
}

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::DuplicateName => {
            ApiResponse::bad_request("A topic with that name already exists")
        }
        CreateTopicError::RepositoryError(msg) => {
            ApiResponse::internal_error("Failed to create topic", &msg)
        }
    }
}
