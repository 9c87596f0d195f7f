use std::sync::Arc;

use crate::user::application::use_cases::{
    create_user::ICreateUserUseCase, delete_user::IDeleteUserUseCase,
    fetch_user_by_id::IFetchUserByIdUseCase, fetch_users::IFetchUsersUseCase,
    update_user::IUpdateUserUseCase,
};

/// User use cases wired into the application state.
#[derive(Clone)]
pub struct UserUseCases {
    pub create: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub get_list: Arc<dyn IFetchUsersUseCase + Send + Sync>,
    pub get_single: Arc<dyn IFetchUserByIdUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteUserUseCase + Send + Sync>,
}
