use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        message_dto::{CreateMessagePayload, UpdateMessagePayload},
        DeletedResponse,
    },
    error::Result,
    utils::extract::{AppJson, AppPath},
    AppState,
};

#[utoipa::path(
    get,
    path = "/messages",
    responses(
        (status = 200, description = "All messages, most recent first", body = [crate::models::message::Message])
    )
)]
#[axum::debug_handler]
pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let messages = state.messages.list().await?;
    Ok(Json(messages))
}

#[utoipa::path(
    get,
    path = "/messages/{id}",
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message found", body = crate::models::message::Message),
        (status = 404, description = "Message not found")
    )
)]
#[axum::debug_handler]
pub async fn get_message(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse> {
    let message = state.messages.get(id).await?;
    Ok(Json(message))
}

#[utoipa::path(
    get,
    path = "/messages/client/{client_id}",
    params(
        ("client_id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Messages of the client, most recent first", body = [crate::models::message::Message])
    )
)]
#[axum::debug_handler]
pub async fn list_client_messages(
    State(state): State<AppState>,
    AppPath(client_id): AppPath<i32>,
) -> Result<impl IntoResponse> {
    let messages = state.messages.list_by_client(client_id).await?;
    Ok(Json(messages))
}

#[utoipa::path(
    post,
    path = "/messages",
    request_body = CreateMessagePayload,
    responses(
        (status = 201, description = "Message created", body = crate::models::message::Message)
    )
)]
#[axum::debug_handler]
pub async fn create_message(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateMessagePayload>,
) -> Result<impl IntoResponse> {
    let message = state.messages.create(payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(
    put,
    path = "/messages/{id}",
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    request_body = UpdateMessagePayload,
    responses(
        (status = 200, description = "Message updated", body = crate::models::message::Message),
        (status = 404, description = "Message not found")
    )
)]
#[axum::debug_handler]
pub async fn update_message(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateMessagePayload>,
) -> Result<impl IntoResponse> {
    let message = state.messages.update(id, payload).await?;
    Ok(Json(message))
}

#[utoipa::path(
    delete,
    path = "/messages/{id}",
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message deleted", body = DeletedResponse),
        (status = 404, description = "Message not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_message(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse> {
    state.messages.delete(id).await?;
    Ok(Json(DeletedResponse::new("Message deleted")))
}
