use actix_web::{get, web, Responder};

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetTopicError,
    AppState,
};

#[get("/api/topics/{id}")]
pub async fn get_topic_by_id_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topics.get_single.execute(&topic_id).await {
        Ok(topic) => ApiResponse::success(topic, "Topic retrieved successfully"),
        Err(GetTopicError::TopicNotFound) => ApiResponse::not_found("Topic not found"),
        Err(GetTopicError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to fetch topic", &msg)
        }
    }
}
