use axum::{response::IntoResponse, Json};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner"))
)]
#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Asistu backend running!" }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Process is serving requests; the database is not probed"))
)]
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
