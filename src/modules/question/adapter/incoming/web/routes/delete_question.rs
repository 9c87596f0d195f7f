use actix_web::{delete, web, Responder};
use serde_json::Value;

use crate::{
    question::application::ports::incoming::use_cases::DeleteQuestionError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/questions/{id}")]
pub async fn delete_question_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let question_id = path.into_inner();

    match data.questions.delete.execute(&question_id).await {
        Ok(()) => ApiResponse::success(Value::Null, "Question deleted successfully"),
        Err(DeleteQuestionError::QuestionNotFound) => {
            ApiResponse::not_found("Question not found")
        }
        Err(DeleteQuestionError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to delete question", &msg)
        }
    }
}
