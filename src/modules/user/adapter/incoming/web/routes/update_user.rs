use actix_web::{put, web, Responder};
use serde::Deserialize;

use crate::{
    shared::api::ApiResponse,
    user::application::use_cases::update_user::UpdateUserError,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[put("/api/users/{id}")]
pub async fn update_user_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> impl Responder {
    let user_id = path.into_inner();
    let payload = payload.into_inner();

    match data
        .users
        .update
        .execute(&user_id, payload.email, payload.name)
        .await
    {
        Ok(user) => ApiResponse::success(user, "User updated successfully"),
        Err(err) => map_update_user_error(err),
    }
}

fn map_update_user_error(err: UpdateUserError) -> actix_web::HttpResponse {
    match err {
        UpdateUserError::EmailTooShort => {
            ApiResponse::bad_request("Email must be at least 5 characters long")
        }
        UpdateUserError::NameTooShort => {
            ApiResponse::bad_request("Name must be at least 2 characters long")
        }
        UpdateUserError::UserNotFound => ApiResponse::not_found("User not found"),
        UpdateUserError::RepositoryError(msg) => {
            ApiResponse::internal_error("Failed to update user", &msg)
        }
    }
}
