use std::sync::Arc;

use actix_web::web;

use crate::question::application::ports::incoming::use_cases::{
    CreateQuestionUseCase, DeleteQuestionUseCase, GetQuestionUseCase, GetQuestionsByTopicUseCase,
    GetQuestionsUseCase, NavigateQuestionsUseCase, QuestionCountsUseCase, UpdateQuestionUseCase,
};
use crate::question::application::question_use_cases::QuestionUseCases;
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicUseCase, GetTopicsUseCase,
    TopicQuestionCountsUseCase, UpdateTopicUseCase,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::user::application::use_cases::{
    create_user::ICreateUserUseCase, delete_user::IDeleteUserUseCase,
    fetch_user_by_id::IFetchUserByIdUseCase, fetch_users::IFetchUsersUseCase,
    update_user::IUpdateUserUseCase,
};
use crate::user::application::user_use_cases::UserUseCases;
use crate::AppState;

/// Builds an `AppState` whose use cases are all stubbed, with `with_*`
/// overrides for the ones a test actually exercises.
pub struct TestAppStateBuilder {
    topics: TopicUseCases,
    questions: QuestionUseCases,
    users: UserUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topics: TopicUseCases {
                create: Arc::new(StubCreateTopicUseCase),
                get_list: Arc::new(StubGetTopicsUseCase),
                get_single: Arc::new(StubGetTopicUseCase),
                update: Arc::new(StubUpdateTopicUseCase),
                delete: Arc::new(StubDeleteTopicUseCase),
                question_counts: Arc::new(StubTopicQuestionCountsUseCase),
            },
            questions: QuestionUseCases {
                create: Arc::new(StubCreateQuestionUseCase),
                get_list: Arc::new(StubGetQuestionsUseCase),
                get_single: Arc::new(StubGetQuestionUseCase),
                get_by_topic: Arc::new(StubGetQuestionsByTopicUseCase),
                navigate: Arc::new(StubNavigateQuestionsUseCase),
                counts_by_topic: Arc::new(StubQuestionCountsUseCase),
                update: Arc::new(StubUpdateQuestionUseCase),
                delete: Arc::new(StubDeleteQuestionUseCase),
            },
            users: UserUseCases {
                create: Arc::new(StubCreateUserUseCase),
                get_list: Arc::new(StubFetchUsersUseCase),
                get_single: Arc::new(StubFetchUserByIdUseCase),
                update: Arc::new(StubUpdateUserUseCase),
                delete: Arc::new(StubDeleteUserUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_topic(mut self, uc: impl CreateTopicUseCase + 'static) -> Self {
        self.topics.create = Arc::new(uc);
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + 'static) -> Self {
        self.topics.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + 'static) -> Self {
        self.topics.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_topic(mut self, uc: impl UpdateTopicUseCase + 'static) -> Self {
        self.topics.update = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(mut self, uc: impl DeleteTopicUseCase + 'static) -> Self {
        self.topics.delete = Arc::new(uc);
        self
    }

    pub fn with_topic_question_counts(
        mut self,
        uc: impl TopicQuestionCountsUseCase + 'static,
    ) -> Self {
        self.topics.question_counts = Arc::new(uc);
        self
    }

    pub fn with_create_question(mut self, uc: impl CreateQuestionUseCase + 'static) -> Self {
        self.questions.create = Arc::new(uc);
        self
    }

    pub fn with_get_questions(mut self, uc: impl GetQuestionsUseCase + 'static) -> Self {
        self.questions.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_question(mut self, uc: impl GetQuestionUseCase + 'static) -> Self {
        self.questions.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_questions_by_topic(
        mut self,
        uc: impl GetQuestionsByTopicUseCase + 'static,
    ) -> Self {
        self.questions.get_by_topic = Arc::new(uc);
        self
    }

    pub fn with_navigate_questions(
        mut self,
        uc: impl NavigateQuestionsUseCase + 'static,
    ) -> Self {
        self.questions.navigate = Arc::new(uc);
        self
    }

    pub fn with_question_counts(mut self, uc: impl QuestionCountsUseCase + 'static) -> Self {
        self.questions.counts_by_topic = Arc::new(uc);
        self
    }

    pub fn with_update_question(mut self, uc: impl UpdateQuestionUseCase + 'static) -> Self {
        self.questions.update = Arc::new(uc);
        self
    }

    pub fn with_delete_question(mut self, uc: impl DeleteQuestionUseCase + 'static) -> Self {
        self.questions.delete = Arc::new(uc);
        self
    }

    pub fn with_create_user(mut self, uc: impl ICreateUserUseCase + 'static) -> Self {
        self.users.create = Arc::new(uc);
        self
    }

    pub fn with_fetch_users(mut self, uc: impl IFetchUsersUseCase + 'static) -> Self {
        self.users.get_list = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_by_id(mut self, uc: impl IFetchUserByIdUseCase + 'static) -> Self {
        self.users.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl IUpdateUserUseCase + 'static) -> Self {
        self.users.update = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl IDeleteUserUseCase + 'static) -> Self {
        self.users.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topics: self.topics,
            questions: self.questions,
            users: self.users,
        })
    }
}
