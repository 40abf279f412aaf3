use std::sync::Arc;

use crate::dto::message_dto::CreateMessagePayload;
use crate::dto::webhook_dto::ProviderWebhook;
use crate::error::Result;
use crate::models::message::Message;
use crate::services::client_service::ClientRepository;
use crate::services::message_service::MessageRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// No client has the sender's phone; nothing was written.
    ClientNotFound,
    MessageSaved(Message),
}

impl IngestOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            IngestOutcome::ClientNotFound => "client not found",
            IngestOutcome::MessageSaved(_) => "message saved",
        }
    }
}

/// Records provider webhook deliveries as inbound messages of known clients.
#[derive(Clone)]
pub struct WebhookIngestor {
    clients: Arc<dyn ClientRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl WebhookIngestor {
    pub fn new(clients: Arc<dyn ClientRepository>, messages: Arc<dyn MessageRepository>) -> Self {
        Self { clients, messages }
    }

    pub async fn ingest(&self, body: &[u8]) -> Result<IngestOutcome> {
        let payload: ProviderWebhook = serde_json::from_slice(body)?;
        let inbound = payload.first_message();

        let Some(phone) = inbound.phone else {
            tracing::info!(object = ?payload.object, "Webhook delivery without a sender phone");
            return Ok(IngestOutcome::ClientNotFound);
        };

        let Some(client) = self.clients.find_by_phone(&phone).await? else {
            tracing::info!(phone = %phone, "Webhook sender does not match any client");
            return Ok(IngestOutcome::ClientNotFound);
        };

        let message = self
            .messages
            .create(CreateMessagePayload::inbound(client.id, inbound.text))
            .await?;
        tracing::info!(
            client_id = client.id,
            message_id = message.id,
            "Stored inbound webhook message"
        );

        Ok(IngestOutcome::MessageSaved(message))
    }
}
