use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const DIRECTION_IN: &str = "in";
pub const DIRECTION_OUT: &str = "out";

/// Channel recorded for messages received through the provider webhook.
pub const WEBHOOK_CHANNEL: &str = "whatsapp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Message {
    pub id: i32,
    pub client_id: Option<i32>,
    pub content: Option<String>,
    pub channel: Option<String>,
    /// `in` for messages from the client, `out` for messages sent by the business.
    pub direction: Option<String>,
    pub created_at: DateTime<Utc>,
}
