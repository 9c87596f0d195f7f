//! Default use-case stubs for handler tests.
//!
//! Every stub either returns an empty list or a repository error, so a test
//! that accidentally exercises an unwired use case fails loudly with a 500.

use async_trait::async_trait;

use crate::question::application::ports::incoming::use_cases::{
    CreateQuestionCommand, CreateQuestionError, CreateQuestionUseCase, DeleteQuestionError,
    DeleteQuestionUseCase, GetQuestionError, GetQuestionUseCase, GetQuestionsByTopicError,
    GetQuestionsByTopicUseCase, GetQuestionsError, GetQuestionsUseCase, NavigateQuestionsError,
    NavigateQuestionsUseCase, QuestionCounts, QuestionCountsError, QuestionCountsUseCase,
    QuestionNavigation, UpdateQuestionCommand, UpdateQuestionError, UpdateQuestionUseCase,
};
use crate::question::application::ports::outgoing::QuestionRecord;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, GetTopicError, GetTopicUseCase, GetTopicsError, GetTopicsUseCase,
    TopicQuestionCounts, TopicQuestionCountsError, TopicQuestionCountsUseCase,
    UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::TopicRecord;
use crate::user::application::ports::outgoing::UserRecord;
use crate::user::application::use_cases::{
    create_user::{CreateUserError, ICreateUserUseCase},
    delete_user::{DeleteUserError, IDeleteUserUseCase},
    fetch_user_by_id::{FetchUserError, IFetchUserByIdUseCase},
    fetch_users::{FetchUsersError, IFetchUsersUseCase},
    update_user::{IUpdateUserUseCase, UpdateUserError},
};

const NOT_WIRED: &str = "not wired in this test";

// ──────────────────────────────────────────────────────────
// Topic stubs
// ──────────────────────────────────────────────────────────

pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError> {
        Err(CreateTopicError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetTopicsUseCase;

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self) -> Result<Vec<TopicRecord>, GetTopicsError> {
        Ok(vec![])
    }
}

pub struct StubGetTopicUseCase;

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, _topic_id: &str) -> Result<TopicRecord, GetTopicError> {
        Err(GetTopicError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubUpdateTopicUseCase;

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(
        &self,
        _topic_id: &str,
        _command: UpdateTopicCommand,
    ) -> Result<TopicRecord, UpdateTopicError> {
        Err(UpdateTopicError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeleteTopicUseCase;

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_id: &str) -> Result<(), DeleteTopicError> {
        Err(DeleteTopicError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubTopicQuestionCountsUseCase;

#[async_trait]
impl TopicQuestionCountsUseCase for StubTopicQuestionCountsUseCase {
    async fn execute(&self) -> Result<TopicQuestionCounts, TopicQuestionCountsError> {
        Err(TopicQuestionCountsError::RepositoryError(
            NOT_WIRED.to_string(),
        ))
    }
}

// ──────────────────────────────────────────────────────────
// Question stubs
// ──────────────────────────────────────────────────────────

pub struct StubCreateQuestionUseCase;

#[async_trait]
impl CreateQuestionUseCase for StubCreateQuestionUseCase {
    async fn execute(
        &self,
        _command: CreateQuestionCommand,
    ) -> Result<QuestionRecord, CreateQuestionError> {
        Err(CreateQuestionError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetQuestionsUseCase;

#[async_trait]
impl GetQuestionsUseCase for StubGetQuestionsUseCase {
    async fn execute(&self) -> Result<Vec<QuestionRecord>, GetQuestionsError> {
        Ok(vec![])
    }
}

pub struct StubGetQuestionUseCase;

#[async_trait]
impl GetQuestionUseCase for StubGetQuestionUseCase {
    async fn execute(&self, _question_id: &str) -> Result<QuestionRecord, GetQuestionError> {
        Err(GetQuestionError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetQuestionsByTopicUseCase;

#[async_trait]
impl GetQuestionsByTopicUseCase for StubGetQuestionsByTopicUseCase {
    async fn execute(
        &self,
        _topic_id: &str,
    ) -> Result<Vec<QuestionRecord>, GetQuestionsByTopicError> {
        Err(GetQuestionsByTopicError::RepositoryError(
            NOT_WIRED.to_string(),
        ))
    }
}

pub struct StubNavigateQuestionsUseCase;

#[async_trait]
impl NavigateQuestionsUseCase for StubNavigateQuestionsUseCase {
    async fn execute(
        &self,
        _topic_id: &str,
        _number: u32,
    ) -> Result<QuestionNavigation, NavigateQuestionsError> {
        Err(NavigateQuestionsError::RepositoryError(
            NOT_WIRED.to_string(),
        ))
    }
}

pub struct StubQuestionCountsUseCase;

#[async_trait]
impl QuestionCountsUseCase for StubQuestionCountsUseCase {
    async fn execute(&self) -> Result<QuestionCounts, QuestionCountsError> {
        Err(QuestionCountsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubUpdateQuestionUseCase;

#[async_trait]
impl UpdateQuestionUseCase for StubUpdateQuestionUseCase {
    async fn execute(
        &self,
        _question_id: &str,
        _command: UpdateQuestionCommand,
    ) -> Result<QuestionRecord, UpdateQuestionError> {
        Err(UpdateQuestionError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeleteQuestionUseCase;

#[async_trait]
impl DeleteQuestionUseCase for StubDeleteQuestionUseCase {
    async fn execute(&self, _question_id: &str) -> Result<(), DeleteQuestionError> {
        Err(DeleteQuestionError::RepositoryError(NOT_WIRED.to_string()))
    }
}

// ──────────────────────────────────────────────────────────
// User stubs
// ──────────────────────────────────────────────────────────

pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _email: String, _name: String) -> Result<UserRecord, CreateUserError> {
        Err(CreateUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubFetchUsersUseCase;

#[async_trait]
impl IFetchUsersUseCase for StubFetchUsersUseCase {
    async fn execute(&self) -> Result<Vec<UserRecord>, FetchUsersError> {
        Ok(vec![])
    }
}

pub struct StubFetchUserByIdUseCase;

#[async_trait]
impl IFetchUserByIdUseCase for StubFetchUserByIdUseCase {
    async fn execute(&self, _user_id: &str) -> Result<UserRecord, FetchUserError> {
        Err(FetchUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubUpdateUserUseCase;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _user_id: &str,
        _email: Option<String>,
        _name: Option<String>,
    ) -> Result<UserRecord, UpdateUserError> {
        Err(UpdateUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: &str) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}
