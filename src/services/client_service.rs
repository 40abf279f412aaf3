use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::client_dto::ClientPayload;
use crate::error::{Error, Result};
use crate::models::client::Client;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Client>>;
    async fn get(&self, id: i32) -> Result<Client>;
    /// First client registered with exactly this phone number, if any.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Client>>;
    async fn create(&self, payload: ClientPayload) -> Result<Client>;
    async fn update(&self, id: i32, payload: ClientPayload) -> Result<Client>;
    async fn delete(&self, id: i32) -> Result<()>;
}

pub fn client_not_found() -> Error {
    Error::NotFound("Client not found".to_string())
}

#[derive(Clone)]
pub struct ClientService {
    pool: PgPool,
}

impl ClientService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for ClientService {
    async fn list(&self) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(clients)
    }

    async fn get(&self, id: i32) -> Result<Client> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(client_not_found)
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE phone = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;
        Ok(client)
    }

    async fn create(&self, payload: ClientPayload) -> Result<Client> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, phone, lastvisit, preferred_employee, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.phone)
        .bind(payload.lastvisit)
        .bind(&payload.preferred_employee)
        .bind(&payload.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    async fn update(&self, id: i32, payload: ClientPayload) -> Result<Client> {
        sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = $1, phone = $2, lastvisit = $3, preferred_employee = $4, notes = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.phone)
        .bind(payload.lastvisit)
        .bind(&payload.preferred_employee)
        .bind(&payload.notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(client_not_found)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(client_not_found());
        }
        Ok(())
    }
}
