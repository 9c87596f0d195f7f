mod create_user;
mod delete_user;
mod get_user_by_id;
mod get_users;
mod update_user;

pub use create_user::create_user_handler;
pub use delete_user::delete_user_handler;
pub use get_user_by_id::get_user_by_id_handler;
pub use get_users::get_users_handler;
pub use update_user::update_user_handler;
