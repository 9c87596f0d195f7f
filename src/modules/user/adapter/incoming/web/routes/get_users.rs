use actix_web::{get, web, Responder};

use crate::{
    shared::api::ApiResponse,
    user::application::use_cases::fetch_users::FetchUsersError,
    AppState,
};

#[get("/api/users")]
pub async fn get_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.users.get_list.execute().await {
        Ok(users) => ApiResponse::success(users, "Users retrieved successfully"),
        Err(FetchUsersError::RepositoryError(msg)) => {
            ApiResponse::internal_error("Failed to fetch users", &msg)
        }
    }
}
