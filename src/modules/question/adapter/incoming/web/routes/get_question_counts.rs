use actix_web::{get, web, Responder};

use crate::{
    question::application::ports::incoming::use_cases::QuestionCountsError,
    shared::api::ApiResponse,
    AppState,
};

// Registered before `/api/questions/{id}` so the literal segment wins.
#[get("/api/questions/count-by-topics")]
pub async fn get_question_counts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.questions.counts_by_topic.execute().await {
        Ok(counts) => ApiResponse::success(counts, "Question counts retrieved successfully"),
        Err(QuestionCountsError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to fetch question counts", &msg)
        }
    }
}
