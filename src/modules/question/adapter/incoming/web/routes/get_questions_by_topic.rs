use actix_web::{get, web, Responder};

use crate::{
    question::application::ports::incoming::use_cases::GetQuestionsByTopicError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/questions/topic/{topic_id}")]
pub async fn get_questions_by_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.questions.get_by_topic.execute(&topic_id).await {
        Ok(questions) => {
            ApiResponse::success(questions, "Topic questions retrieved successfully")
        }
        Err(GetQuestionsByTopicError::TopicNotFound) => ApiResponse::not_found("Topic not found"),
        Err(GetQuestionsByTopicError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to fetch topic questions", &msg)
        }
    }
}
