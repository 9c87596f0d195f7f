pub mod app_state_builder;
pub mod mock_repositories;
pub mod stubs;
