mod question_repository;

pub use question_repository::{
    CreateQuestionData, QuestionRecord, QuestionRepository, QuestionRepositoryError,
    UpdateQuestionData,
};
