pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::services::{
    client_service::{ClientRepository, ClientService},
    message_service::{MessageRepository, MessageService},
    webhook_service::WebhookIngestor,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub webhook_ingestor: WebhookIngestor,
    pub webhook_verify_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        Self::with_repositories(
            Arc::new(ClientService::new(pool.clone())),
            Arc::new(MessageService::new(pool)),
            config.webhook_verify_token.as_deref(),
        )
    }

    pub fn with_repositories(
        clients: Arc<dyn ClientRepository>,
        messages: Arc<dyn MessageRepository>,
        webhook_verify_token: Option<&str>,
    ) -> Self {
        let webhook_ingestor = WebhookIngestor::new(clients.clone(), messages.clone());

        Self {
            clients,
            messages,
            webhook_ingestor,
            webhook_verify_token: webhook_verify_token.map(Arc::from),
        }
    }
}
