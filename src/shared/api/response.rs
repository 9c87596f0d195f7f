// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::Value;

/// Uniform response envelope.
///
/// Every endpoint answers with this shape; `error` carries supplementary
/// detail such as the conflicting record on duplicate-question rejections.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            message: message.to_string(),
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T, message: &str) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            message: message.to_string(),
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, message: &str, error: Option<Value>) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            message: message.to_string(),
            data: None,
            error,
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message, None)
    }

    pub fn bad_request_with(message: &str, error: Value) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message, Some(error))
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message, None)
    }

    pub fn internal_error(message: &str, detail: &str) -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            Some(Value::String(detail.to_string())),
        )
    }
}
