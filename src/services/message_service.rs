use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::message_dto::{CreateMessagePayload, UpdateMessagePayload};
use crate::error::{Error, Result};
use crate::models::message::Message;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Most recent first.
    async fn list(&self) -> Result<Vec<Message>>;
    async fn get(&self, id: i32) -> Result<Message>;
    async fn list_by_client(&self, client_id: i32) -> Result<Vec<Message>>;
    async fn create(&self, payload: CreateMessagePayload) -> Result<Message>;
    async fn update(&self, id: i32, payload: UpdateMessagePayload) -> Result<Message>;
    async fn delete(&self, id: i32) -> Result<()>;
}

pub fn message_not_found() -> Error {
    Error::NotFound("Message not found".to_string())
}

#[derive(Clone)]
pub struct MessageService {
    pool: PgPool,
}

impl MessageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for MessageService {
    async fn list(&self) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    async fn get(&self, id: i32) -> Result<Message> {
        sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(message_not_found)
    }

    async fn list_by_client(&self, client_id: i32) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE client_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    async fn create(&self, payload: CreateMessagePayload) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (client_id, content, channel, direction)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(payload.client_id)
        .bind(&payload.content)
        .bind(&payload.channel)
        .bind(&payload.direction)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn update(&self, id: i32, payload: UpdateMessagePayload) -> Result<Message> {
        sqlx::query_as::<_, Message>(
            r#"
            UPDATE messages
            SET content = $1, channel = $2, direction = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&payload.content)
        .bind(&payload.channel)
        .bind(&payload.direction)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(message_not_found)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(message_not_found());
        }
        Ok(())
    }
}
