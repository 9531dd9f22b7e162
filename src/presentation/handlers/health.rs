use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}

pub async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: "Server is running".to_string(),
        }),
    )
}
