mod create_question_use_case;
mod delete_question_use_case;
mod get_question_use_case;
mod get_questions_by_topic_use_case;
mod get_questions_use_case;
mod navigate_questions_use_case;
mod question_counts_use_case;
mod update_question_use_case;

pub use create_question_use_case::{
    CreateQuestionCommand, CreateQuestionCommandError, CreateQuestionError, CreateQuestionUseCase,
};
pub use delete_question_use_case::{DeleteQuestionError, DeleteQuestionUseCase};
pub use get_question_use_case::{GetQuestionError, GetQuestionUseCase};
pub use get_questions_by_topic_use_case::{GetQuestionsByTopicError, GetQuestionsByTopicUseCase};
pub use get_questions_use_case::{GetQuestionsError, GetQuestionsUseCase};
pub use navigate_questions_use_case::{
    NavigateQuestionsError, NavigateQuestionsUseCase, NavigationInfo, QuestionNavigation,
};
pub use question_counts_use_case::{
    QuestionCounts, QuestionCountsError, QuestionCountsUseCase, TopicQuestionCountSummary,
};
pub use update_question_use_case::{
    UpdateQuestionCommand, UpdateQuestionCommandError, UpdateQuestionError, UpdateQuestionUseCase,
};
