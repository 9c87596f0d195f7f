pub mod ports;
pub mod use_cases;
pub mod user_use_cases;
