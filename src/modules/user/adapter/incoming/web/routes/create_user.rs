use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    shared::api::ApiResponse,
    user::application::use_cases::create_user::CreateUserError,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateUserRequest {
    pub email: String,
    pub name: String,
}

#[post("/api/users")]
pub async fn create_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    match data.users.create.execute(payload.email, payload.name).await {
        Ok(user) => ApiResponse::created(user, "User created successfully"),
        Err(err) => map_create_user_error(err),
    }
}

fn map_create_user_error(err: CreateUserError) -> actix_web::HttpResponse {
    match err {
        CreateUserError::EmailTooShort => {
            ApiResponse::bad_request("Email must be at least 5 characters long")
        }
        CreateUserError::NameTooShort => {
            ApiResponse::bad_request("Name must be at least 2 characters long")
        }
        CreateUserError::UserAlreadyExists => ApiResponse::bad_request("User already exists"),
        CreateUserError::RepositoryError(msg) => {
            ApiResponse::internal_error("Failed to create user", &msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::{
        tests::support::app_state_builder::TestAppStateBuilder,
        user::application::ports::outgoing::UserRecord,
        user::application::use_cases::create_user::ICreateUserUseCase,
    };

    #[derive(Clone)]
    struct MockCreateUserUseCase {
        result: Result<UserRecord, CreateUserError>,
    }

    #[async_trait]
    impl ICreateUserUseCase for MockCreateUserUseCase {
        async fn execute(
            &self,
            _email: String,
            _name: String,
        ) -> Result<UserRecord, CreateUserError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn valid_payload_returns_created() {
        let user = UserRecord {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            created_at: None,
            updated_at: None,
        };
        let state = TestAppStateBuilder::default()
            .with_create_user(MockCreateUserUseCase { result: Ok(user) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({ "email": "ada@example.com", "name": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["email"], "ada@example.com");
    }

    #[actix_web::test]
    async fn duplicate_email_returns_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_create_user(MockCreateUserUseCase {
                result: Err(CreateUserError::UserAlreadyExists),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({ "email": "ada@example.com", "name": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "User already exists");
    }
}
