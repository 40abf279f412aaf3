use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::message::{DIRECTION_IN, WEBHOOK_CHANNEL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateMessagePayload {
    pub client_id: Option<i32>,
    pub content: Option<String>,
    pub channel: Option<String>,
    pub direction: Option<String>,
}

impl CreateMessagePayload {
    /// Message received from a known client through the provider webhook.
    pub fn inbound(client_id: i32, content: Option<String>) -> Self {
        Self {
            client_id: Some(client_id),
            content,
            channel: Some(WEBHOOK_CHANNEL.to_string()),
            direction: Some(DIRECTION_IN.to_string()),
        }
    }
}

/// Body of `PUT /messages/{id}`. `client_id` and `created_at` are not updatable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateMessagePayload {
    pub content: Option<String>,
    pub channel: Option<String>,
    pub direction: Option<String>,
}
