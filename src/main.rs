pub mod modules;
pub use modules::question;
pub use modules::topic;
pub use modules::user;
pub mod health;
pub mod shared;
pub mod store;

use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::question::adapter::outgoing::QuestionStoreRepository;
use crate::question::application::question_use_cases::QuestionUseCases;
use crate::question::application::services::{
    CreateQuestionService, DeleteQuestionService, GetQuestionService, GetQuestionsByTopicService,
    GetQuestionsService, NavigateQuestionsService, QuestionCountsService, UpdateQuestionService,
};
use crate::shared::api::{custom_json_config, ApiResponse};
use crate::store::{DocumentStore, MemoryDocumentStore};
use crate::topic::adapter::outgoing::TopicStoreRepository;
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, GetTopicService, GetTopicsService,
    TopicQuestionCountsService, UpdateTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::user::adapter::outgoing::UserStoreRepository;
use crate::user::application::use_cases::{
    create_user::CreateUserUseCase, delete_user::DeleteUserUseCase,
    fetch_user_by_id::FetchUserByIdUseCase, fetch_users::FetchUsersUseCase,
    update_user::UpdateUserUseCase,
};
use crate::user::application::user_use_cases::UserUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topics: TopicUseCases,
    pub questions: QuestionUseCases,
    pub users: UserUseCases,
}

/// Wires repositories and services over the injected store handle. The
/// store is constructed once per process and shared by every repository.
pub fn app_state_with_store(store: Arc<dyn DocumentStore>) -> AppState {
    let topic_repo = TopicStoreRepository::new(Arc::clone(&store));
    let question_repo = QuestionStoreRepository::new(Arc::clone(&store));
    let user_repo = UserStoreRepository::new(Arc::clone(&store));

    let topics = TopicUseCases {
        create: Arc::new(CreateTopicService::new(topic_repo.clone())),
        get_list: Arc::new(GetTopicsService::new(topic_repo.clone())),
        get_single: Arc::new(GetTopicService::new(topic_repo.clone())),
        update: Arc::new(UpdateTopicService::new(topic_repo.clone())),
        delete: Arc::new(DeleteTopicService::new(topic_repo.clone())),
        question_counts: Arc::new(TopicQuestionCountsService::new(
            topic_repo.clone(),
            question_repo.clone(),
        )),
    };

    let questions = QuestionUseCases {
        create: Arc::new(CreateQuestionService::new(
            question_repo.clone(),
            topic_repo.clone(),
        )),
        get_list: Arc::new(GetQuestionsService::new(question_repo.clone())),
        get_single: Arc::new(GetQuestionService::new(question_repo.clone())),
        get_by_topic: Arc::new(GetQuestionsByTopicService::new(
            question_repo.clone(),
            topic_repo.clone(),
        )),
        navigate: Arc::new(NavigateQuestionsService::new(
            question_repo.clone(),
            topic_repo.clone(),
        )),
        counts_by_topic: Arc::new(QuestionCountsService::new(
            question_repo.clone(),
            topic_repo.clone(),
        )),
        update: Arc::new(UpdateQuestionService::new(
            question_repo.clone(),
            topic_repo.clone(),
        )),
        delete: Arc::new(DeleteQuestionService::new(question_repo)),
    };

    let users = UserUseCases {
        create: Arc::new(CreateUserUseCase::new(user_repo.clone())),
        get_list: Arc::new(FetchUsersUseCase::new(user_repo.clone())),
        get_single: Arc::new(FetchUserByIdUseCase::new(user_repo.clone())),
        update: Arc::new(UpdateUserUseCase::new(user_repo.clone())),
        delete: Arc::new(DeleteUserUseCase::new(user_repo)),
    };

    AppState {
        topics,
        questions,
        users,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let server_url = format!("{host}:{port}");

    // The process-local store; a managed-database client implementing
    // DocumentStore drops in here.
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
    let state = app_state_with_store(store);

    info!("Server running on {server_url}");
    info!("Health check at http://{server_url}/health");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .default_service(web::route().to(not_found_handler))
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Topics (literal paths before `{id}`)
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(
        crate::topic::adapter::incoming::web::routes::get_topics_with_question_counts_handler,
    );
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_by_id_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
    // Questions (literal paths before `{id}`)
    cfg.service(crate::question::adapter::incoming::web::routes::create_question_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::get_questions_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::get_question_counts_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::navigate_questions_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::get_questions_by_topic_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::get_question_by_id_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::update_question_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::delete_question_handler);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_by_id_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::delete_user_handler);
}

async fn not_found_handler(req: HttpRequest) -> HttpResponse {
    ApiResponse::not_found(&format!("Route {} not found", req.path()))
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
