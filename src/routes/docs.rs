use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::{
    client_dto::ClientPayload,
    message_dto::{CreateMessagePayload, UpdateMessagePayload},
    webhook_dto::WebhookStatusResponse,
    DeletedResponse,
};
use crate::models::{client::Client, message::Message};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::root,
        super::health::health,
        super::client::list_clients,
        super::client::get_client,
        super::client::create_client,
        super::client::update_client,
        super::client::delete_client,
        super::message::list_messages,
        super::message::get_message,
        super::message::list_client_messages,
        super::message::create_message,
        super::message::update_message,
        super::message::delete_message,
        super::webhook::receive_webhook,
        super::webhook::verify_webhook,
    ),
    components(schemas(
        Client,
        ClientPayload,
        Message,
        CreateMessagePayload,
        UpdateMessagePayload,
        DeletedResponse,
        WebhookStatusResponse,
    )),
    tags((name = "asistu", description = "Clients and messages API"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
