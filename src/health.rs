use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;
use std::env;

#[derive(Serialize)]
struct HealthEndpoints {
    users: &'static str,
    topics: &'static str,
    questions: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    success: bool,
    message: &'static str,
    timestamp: String,
    environment: String,
    endpoints: HealthEndpoints,
}

/// LIVENESS PROBE
/// - No store I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        success: true,
        message: "API is running",
        timestamp: Utc::now().to_rfc3339(),
        environment: env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
        endpoints: HealthEndpoints {
            users: "/api/users",
            topics: "/api/topics",
            questions: "/api/questions",
        },
    })
}
