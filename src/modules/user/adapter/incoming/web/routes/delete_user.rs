use actix_web::{delete, web, Responder};
use serde_json::Value;

use crate::{
    shared::api::ApiResponse,
    user::application::use_cases::delete_user::DeleteUserError,
    AppState,
};

#[delete("/api/users/{id}")]
pub async fn delete_user_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.users.delete.execute(&user_id).await {
        Ok(()) => ApiResponse::success(Value::Null, "User deleted successfully"),
        Err(DeleteUserError::UserNotFound) => ApiResponse::not_found("User not found"),
        Err(DeleteUserError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to delete user", &msg)
        }
    }
}
