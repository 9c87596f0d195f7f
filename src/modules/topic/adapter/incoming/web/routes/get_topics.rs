use actix_web::{get, web, Responder};

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetTopicsError,
    AppState,
};

#[get("/api/topics")]
pub async fn get_topics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topics.get_list.execute().await {
        Ok(topics) => ApiResponse::success(topics, "Topics retrieved successfully"),
        Err(GetTopicsError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to fetch topics", &msg)
        }
    }
}
