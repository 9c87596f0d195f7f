use actix_web::{delete, web, Responder};
use serde_json::Value;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::DeleteTopicError,
    AppState,
};

#[delete("/api/topics/{id}")]
pub async fn delete_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topics.delete.execute(&topic_id).await {
        Ok(()) => ApiResponse::success(Value::Null, "Topic deleted successfully"),
        Err(DeleteTopicError::TopicNotFound) => ApiResponse::not_found("Topic not found"),
        Err(DeleteTopicError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to delete topic", &msg)
        }
    }
}
