use actix_web::{get, web, Responder};

use crate::{
    question::application::ports::incoming::use_cases::GetQuestionsError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/questions")]
pub async fn get_questions_handler(data: web::Data<AppState>) -> impl Responder {
    match data.questions.get_list.execute().await {
        Ok(questions) => ApiResponse::success(questions, "Questions retrieved successfully"),
        Err(GetQuestionsError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to fetch questions", &msg)
        }
    }
}
