use actix_web::{get, web, Responder};

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::TopicQuestionCountsError,
    AppState,
};

// Registered before `/api/topics/{id}` so the literal segment wins.
#[get("/api/topics/with-questions-count")]
pub async fn get_topics_with_question_counts_handler(
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topics.question_counts.execute().await {
        Ok(counts) => {
            ApiResponse::success(counts, "Topics with question counts retrieved successfully")
        }
        Err(TopicQuestionCountsError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to fetch topics with question counts", &msg)
        }
    }
}
