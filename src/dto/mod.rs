pub mod client_dto;
pub mod message_dto;
pub mod webhook_dto;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub message: String,
}

impl DeletedResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
