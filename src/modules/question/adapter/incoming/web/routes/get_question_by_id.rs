use actix_web::{get, web, Responder};

use crate::{
    question::application::ports::incoming::use_cases::GetQuestionError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/questions/{id}")]
pub async fn get_question_by_id_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let question_id = path.into_inner();

    match data.questions.get_single.execute(&question_id).await {
        Ok(question) => ApiResponse::success(question, "Question retrieved successfully"),
        Err(GetQuestionError::QuestionNotFound) => ApiResponse::not_found("Question not found"),
        Err(GetQuestionError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to fetch question", &msg)
        }
    }
}
