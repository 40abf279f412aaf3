use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{client_dto::ClientPayload, DeletedResponse},
    error::Result,
    utils::extract::{AppJson, AppPath},
    AppState,
};

#[utoipa::path(
    get,
    path = "/clients",
    responses(
        (status = 200, description = "All clients, newest first", body = [crate::models::client::Client])
    )
)]
#[axum::debug_handler]
pub async fn list_clients(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let clients = state.clients.list().await?;
    Ok(Json(clients))
}

#[utoipa::path(
    get,
    path = "/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = crate::models::client::Client),
        (status = 404, description = "Client not found")
    )
)]
#[axum::debug_handler]
pub async fn get_client(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse> {
    let client = state.clients.get(id).await?;
    Ok(Json(client))
}

#[utoipa::path(
    post,
    path = "/clients",
    request_body = ClientPayload,
    responses(
        (status = 201, description = "Client created", body = crate::models::client::Client),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_client(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ClientPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let client = state.clients.create(payload).await?;
    tracing::info!(client_id = client.id, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

#[utoipa::path(
    put,
    path = "/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = ClientPayload,
    responses(
        (status = 200, description = "Client replaced", body = crate::models::client::Client),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Client not found")
    )
)]
#[axum::debug_handler]
pub async fn update_client(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ClientPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let client = state.clients.update(id, payload).await?;
    Ok(Json(client))
}

#[utoipa::path(
    delete,
    path = "/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client deleted", body = DeletedResponse),
        (status = 404, description = "Client not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_client(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse> {
    state.clients.delete(id).await?;
    tracing::info!(client_id = id, "Client deleted");
    Ok(Json(DeletedResponse::new("Client deleted")))
}
