use actix_web::{get, web, Responder};

use crate::{
    question::application::ports::incoming::use_cases::NavigateQuestionsError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/questions/topic/{topic_id}/navigate/{number}")]
pub async fn navigate_questions_handler(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (topic_id, number) = path.into_inner();

    // The path segment is parsed by hand so a non-numeric or non-positive
    // value yields the 400 envelope instead of actix's default 404.
    let number: u32 = match number.parse() {
        Ok(number) => number,
        Err(_) => return ApiResponse::bad_request("number must be a positive integer"),
    };

    match data.questions.navigate.execute(&topic_id, number).await {
        Ok(navigation) => ApiResponse::success(navigation, "Question retrieved successfully"),
        Err(err) => map_navigate_error(err),
    }
}

fn map_navigate_error(err: NavigateQuestionsError) -> actix_web::HttpResponse {
    match err {
        NavigateQuestionsError::InvalidNumber => {
            ApiResponse::bad_request("number must be a positive integer")
        }
        NavigateQuestionsError::TopicNotFound => ApiResponse::not_found("Topic not found"),
        NavigateQuestionsError::QuestionNotFound => {
            ApiResponse::not_found("Question not found in this topic")
        }
        NavigateQuestionsError::RepositoryError(msg) => {
            ApiResponse::internal_error("Failed to navigate questions", &msg)
        }
    }
}
