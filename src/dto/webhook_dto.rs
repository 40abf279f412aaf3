//! Inbound payloads of the messaging-provider webhook (WhatsApp Cloud API shape).
//!
//! Every level is optional so that a payload missing any intermediate field
//! still deserializes; extraction then yields absent values.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderWebhook {
    pub object: Option<String>,
    #[serde(alias = "entries")]
    pub entry: Option<Vec<WebhookEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEntry {
    pub id: Option<String>,
    pub changes: Option<Vec<WebhookChange>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookChange {
    pub field: Option<String>,
    pub value: Option<WebhookValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookValue {
    pub messaging_product: Option<String>,
    pub messages: Option<Vec<WebhookMessage>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookMessage {
    pub from: Option<String>,
    pub id: Option<String>,
    pub timestamp: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub text: Option<WebhookText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookText {
    pub body: Option<String>,
}

/// Sender phone and text of the first message in a webhook delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundText {
    pub phone: Option<String>,
    pub text: Option<String>,
}

impl ProviderWebhook {
    pub fn first_message(&self) -> InboundText {
        let message = self
            .entry
            .as_deref()
            .and_then(|entries| entries.first())
            .and_then(|entry| entry.changes.as_deref())
            .and_then(|changes| changes.first())
            .and_then(|change| change.value.as_ref())
            .and_then(|value| value.messages.as_deref())
            .and_then(|messages| messages.first());

        match message {
            Some(message) => InboundText {
                phone: message.from.clone(),
                text: message.text.as_ref().and_then(|text| text.body.clone()),
            },
            None => InboundText::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WebhookStatusResponse {
    /// `client not found` or `message saved`.
    pub status: String,
}

/// Query string of the provider's callback verification request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VerifyQuery {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}
