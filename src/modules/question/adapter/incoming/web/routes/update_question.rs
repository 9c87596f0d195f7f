use actix_web::{put, web, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::{
    question::application::domain::entities::{Locale, QuestionLocales},
    question::application::ports::incoming::use_cases::{
        UpdateQuestionCommand, UpdateQuestionCommandError, UpdateQuestionError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateQuestionRequest {
    pub topic_id: Option<String>,
    pub number: Option<u32>,
    pub correct_answers: Option<Vec<u32>>,
    pub locales: Option<QuestionLocales>,
}

#[put("/api/questions/{id}")]
pub async fn update_question_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateQuestionRequest>,
) -> impl Responder {
    let question_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match UpdateQuestionCommand::new(
        payload.topic_id,
        payload.number,
        payload.correct_answers,
        payload.locales,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.questions.update.execute(&question_id, command).await {
        Ok(question) => ApiResponse::success(question, "Question updated successfully"),
        Err(err) => map_update_question_error(err),
    }
}

fn locale_name(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "English",
        Locale::Es => "Spanish",
    }
}

fn map_command_error(err: UpdateQuestionCommandError) -> actix_web::HttpResponse {
    ApiResponse::bad_request(&err.to_string())
}

fn map_update_question_error(err: UpdateQuestionError) -> actix_web::HttpResponse {
    match err {
        UpdateQuestionError::QuestionNotFound => ApiResponse::not_found("Question not found"),
        UpdateQuestionError::TopicNotFound => {
            ApiResponse::bad_request("The specified topic does not exist")
        }
        UpdateQuestionError::DuplicateNumber => ApiResponse::bad_request(
            "A question with that number already exists in the specified topic",
        ),
        UpdateQuestionError::DuplicateQuestionText { locale, conflicting } => {
            let message = format!(
                "A question with the same {} text already exists in this topic",
                locale_name(locale)
            );
            ApiResponse::bad_request_with(&message, json!({ "duplicateQuestion": conflicting }))
        }
        UpdateQuestionError::Validation(err) => ApiResponse::bad_request(&err.to_string()),
        UpdateQuestionError::RepositoryError(msg) => {
            ApiResponse::internal_error("Failed to update question", &msg)
        }
    }
}
