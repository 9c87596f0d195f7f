pub mod create_user;
pub mod delete_user;
pub mod fetch_user_by_id;
pub mod fetch_users;
pub mod update_user;
