mod create_question;
mod delete_question;
mod get_question_by_id;
mod get_question_counts;
mod get_questions;
mod get_questions_by_topic;
mod navigate_questions;
mod update_question;

pub use create_question::create_question_handler;
pub use delete_question::delete_question_handler;
pub use get_question_by_id::get_question_by_id_handler;
pub use get_question_counts::get_question_counts_handler;
pub use get_questions::get_questions_handler;
pub use get_questions_by_topic::get_questions_by_topic_handler;
pub use navigate_questions::navigate_questions_handler;
pub use update_question::update_question_handler;
