pub mod client;
pub mod docs;
pub mod health;
pub mod message;
pub mod webhook;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::api_cors, AppState};

pub fn router(state: AppState) -> Router {
    let client_routes = Router::new()
        .route(
            "/clients",
            get(client::list_clients).post(client::create_client),
        )
        .route(
            "/clients/:id",
            get(client::get_client)
                .put(client::update_client)
                .delete(client::delete_client),
        );

    let message_routes = Router::new()
        .route(
            "/messages",
            get(message::list_messages).post(message::create_message),
        )
        .route(
            "/messages/webhook",
            get(webhook::verify_webhook).post(webhook::receive_webhook),
        )
        .route(
            "/messages/client/:client_id",
            get(message::list_client_messages),
        )
        .route(
            "/messages/:id",
            get(message::get_message)
                .put(message::update_message)
                .delete(message::delete_message),
        );

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(client_routes)
        .merge(message_routes)
        .with_state(state)
        .layer(api_cors())
        .layer(TraceLayer::new_for_http())
}
