mod create_question_service;
mod delete_question_service;
mod get_question_service;
mod get_questions_by_topic_service;
mod get_questions_service;
mod navigate_questions_service;
mod question_counts_service;
mod update_question_service;

pub use create_question_service::CreateQuestionService;
pub use delete_question_service::DeleteQuestionService;
pub use get_question_service::GetQuestionService;
pub use get_questions_by_topic_service::GetQuestionsByTopicService;
pub use get_questions_service::GetQuestionsService;
pub use navigate_questions_service::NavigateQuestionsService;
pub use question_counts_service::QuestionCountsService;
pub use update_question_service::UpdateQuestionService;
