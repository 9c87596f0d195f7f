use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::{
    question::application::domain::entities::{Locale, QuestionLocales},
    question::application::ports::incoming::use_cases::{
        CreateQuestionCommand, CreateQuestionCommandError, CreateQuestionError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CreateQuestionRequest {
    pub topic_id: String,
    pub number: u32,
    pub correct_answers: Vec<u32>,
    pub locales: QuestionLocales,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/questions")]
pub async fn create_question_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateQuestionRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateQuestionCommand::new(
        payload.topic_id,
        payload.number,
        payload.correct_answers,
        payload.locales,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.questions.create.execute(command).await {
        Ok(question) => ApiResponse::created(question, "Question created successfully"),
        Err(err) => map_create_question_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn locale_name(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "English",
        Locale::Es => "Spanish",
    }
}

fn map_command_error(err: CreateQuestionCommandError) -> actix_web::HttpResponse {
    ApiResponse::bad_request(&err.to_string())
}

fn map_create_question_error(err: CreateQuestionError) -> actix_web::HttpResponse {
    match err {
        CreateQuestionError::TopicNotFound => {
            ApiResponse::bad_request("The specified topic does not exist")
        }
        CreateQuestionError::DuplicateNumber => ApiResponse::bad_request(
            "A question with that number already exists in the specified topic",
        ),
        CreateQuestionError::DuplicateQuestionText { locale, conflicting } => {
            let message = format!(
                "A question with the same {} text already exists in this topic",
                locale_name(locale)
            );
            ApiResponse::bad_request_with(&message, json!({ "duplicateQuestion": conflicting }))
        }
        CreateQuestionError::RepositoryError(msg) => {
            ApiResponse::internal_error("Failed to create question", &msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::{
        question::application::ports::{
            incoming::use_cases::CreateQuestionUseCase, outgoing::QuestionRecord,
        },
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    // ============================================================
    // CreateQuestion Use Case Mock
    // ============================================================

    #[derive(Clone)]
    struct MockCreateQuestionUseCase {
        result: Result<QuestionRecord, CreateQuestionError>,
    }

    #[async_trait]
    impl CreateQuestionUseCase for MockCreateQuestionUseCase {
        async fn execute(
            &self,
            _command: CreateQuestionCommand,
        ) -> Result<QuestionRecord, CreateQuestionError> {
            self.result.clone()
        }
    }

    // ============================================================
    // Helpers
    // ============================================================

    fn question_body(en_ids: &[u32], es_ids: &[u32], correct: &[u32]) -> serde_json::Value {
        let options = |ids: &[u32]| {
            ids.iter()
                .map(|id| serde_json::json!({ "id": id, "text": format!("Option {id}") }))
                .collect::<Vec<_>>()
        };

        serde_json::json!({
            "topic_id": "t1",
            "number": 1,
            "correct_answers": correct,
            "locales": {
                "en": {
                    "question": "What is 2+2?",
                    "options": options(en_ids),
                    "explanation": "2+2 equals 4"
                },
                "es": {
                    "question": "¿Cuánto es 2+2?",
                    "options": options(es_ids),
                    "explanation": "2+2 es igual a 4"
                }
            }
        })
    }

    fn sample_record() -> QuestionRecord {
        let body = question_body(&[1, 2], &[1, 2], &[1]);
        QuestionRecord {
            id: "q1".to_string(),
            topic_id: "t1".to_string(),
            number: 1,
            correct_answers: vec![1],
            locales: serde_json::from_value(body["locales"].clone()).unwrap(),
            created_at: None,
            updated_at: None,
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    // ============================================================
    // Tests
    // ============================================================

    #[actix_web::test]
    async fn valid_payload_returns_created() {
        let state = TestAppStateBuilder::default()
            .with_create_question(MockCreateQuestionUseCase {
                result: Ok(sample_record()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_question_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions")
            .set_json(question_body(&[1, 2], &[1, 2], &[1]))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["number"], 1);
        assert_eq!(json["data"]["locales"]["en"]["options"][0]["id"], 1);
    }

    #[actix_web::test]
    async fn mismatched_option_id_sets_return_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_question_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions")
            .set_json(question_body(&[1, 2], &[1, 3], &[1]))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["success"], false);
        assert!(
            json["message"].as_str().unwrap().contains("must match"),
            "unexpected message: {}",
            json["message"]
        );
    }

    #[actix_web::test]
    async fn answers_outside_the_option_ids_list_valid_ids() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_question_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions")
            .set_json(question_body(&[1, 2, 3, 4], &[1, 2, 3, 4], &[5, 6]))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("Valid ids: [1, 2, 3, 4]"),
            "unexpected message: {}",
            json["message"]
        );
    }

    #[actix_web::test]
    async fn duplicate_option_ids_return_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_question_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions")
            .set_json(question_body(&[1, 1, 3, 4], &[1, 2, 3, 4], &[1]))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("Duplicate option id 1"),
            "unexpected message: {}",
            json["message"]
        );
    }

    #[actix_web::test]
    async fn duplicate_text_carries_the_conflicting_record() {
        let state = TestAppStateBuilder::default()
            .with_create_question(MockCreateQuestionUseCase {
                result: Err(CreateQuestionError::DuplicateQuestionText {
                    locale: Locale::En,
                    conflicting: Box::new(sample_record()),
                }),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_question_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions")
            .set_json(question_body(&[1, 2], &[1, 2], &[1]))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert!(json["message"].as_str().unwrap().contains("English"));
        assert_eq!(json["error"]["duplicateQuestion"]["id"], "q1");
        assert_eq!(
            json["error"]["duplicateQuestion"]["locales"]["en"]["question"],
            "What is 2+2?"
        );
    }

    #[actix_web::test]
    async fn unknown_topic_returns_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_create_question(MockCreateQuestionUseCase {
                result: Err(CreateQuestionError::TopicNotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_question_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions")
            .set_json(question_body(&[1, 2], &[1, 2], &[1]))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["message"], "The specified topic does not exist");
    }
}
