use actix_web::{put, web, Responder};
use serde::Deserialize;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{
        UpdateTopicCommand, UpdateTopicCommandError, UpdateTopicError,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateTopicRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[put("/api/topics/{id}")]
pub async fn update_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateTopicRequest>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let payload = payload.into_inner();

    let command =
        match UpdateTopicCommand::new(payload.name, payload.description, payload.image_url) {
            Ok(cmd) => cmd,
            Err(err) => return map_command_error(err),
        };

    match data.topics.update.execute(&topic_id, command).await {
        Ok(topic) => ApiResponse::success(topic, "Topic updated successfully"),
        Err(err) => map_update_topic_error(err),
    }
}

fn map_command_error(err: UpdateTopicCommandError) -> actix_web::HttpResponse {
    match err {
        UpdateTopicCommandError::NameTooShort => {
            ApiResponse::bad_request("Name must be at least 3 characters long")
        }
        UpdateTopicCommandError::DescriptionTooShort => {
            ApiResponse::bad_request("Description must be at least 10 characters long")
        }
    }
}

fn map_update_topic_error(err: UpdateTopicError) -> actix_web::HttpResponse {
    match err {
        UpdateTopicError::TopicNotFound => ApiResponse::not_found("Topic not found"),
        UpdateTopicError::DuplicateName => {
            ApiResponse::bad_request("A topic with that name already exists")
        }
        UpdateTopicError::RepositoryError(msg) => {
            ApiResponse::internal_error("Failed to update topic", &msg)
        }
    }
}
