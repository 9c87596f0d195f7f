use actix_web::{get, web, Responder};

use crate::{
    shared::api::ApiResponse,
    user::application::use_cases::fetch_user_by_id::FetchUserError,
    AppState,
};

#[get("/api/users/{id}")]
pub async fn get_user_by_id_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.users.get_single.execute(&user_id).await {
        Ok(user) => ApiResponse::success(user, "User retrieved successfully"),
        Err(FetchUserError::UserNotFound) => ApiResponse::not_found("User not found"),
        Err(FetchUserError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to fetch user", &msg)
        }
    }
}
