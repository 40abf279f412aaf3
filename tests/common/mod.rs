#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use asistu_backend::{
    dto::{
        client_dto::ClientPayload,
        message_dto::{CreateMessagePayload, UpdateMessagePayload},
    },
    error::{Error, Result},
    models::{client::Client, message::Message},
    services::{
        client_service::{client_not_found, ClientRepository},
        message_service::{message_not_found, MessageRepository},
    },
    AppState,
};

pub const VERIFY_TOKEN: &str = "verify_test";

#[derive(Default)]
struct Tables {
    clients: Vec<Client>,
    messages: Vec<Message>,
    next_client_id: i32,
    next_message_id: i32,
}

/// Repository backed by plain vectors, mirroring the Postgres ordering rules.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn message_count(&self) -> usize {
        self.tables.lock().unwrap().messages.len()
    }
}

#[async_trait]
impl ClientRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Client>> {
        let mut clients = self.tables.lock().unwrap().clients.clone();
        clients.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(clients)
    }

    async fn get(&self, id: i32) -> Result<Client> {
        let tables = self.tables.lock().unwrap();
        tables
            .clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(client_not_found)
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Client>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .clients
            .iter()
            .filter(|c| c.phone == phone)
            .min_by_key(|c| c.id)
            .cloned())
    }

    async fn create(&self, payload: ClientPayload) -> Result<Client> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_client_id += 1;
        let client = Client {
            id: tables.next_client_id,
            name: payload.name,
            phone: payload.phone,
            lastvisit: payload.lastvisit,
            preferred_employee: payload.preferred_employee,
            notes: payload.notes,
        };
        tables.clients.push(client.clone());
        Ok(client)
    }

    async fn update(&self, id: i32, payload: ClientPayload) -> Result<Client> {
        let mut tables = self.tables.lock().unwrap();
        let client = tables
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(client_not_found)?;
        client.name = payload.name;
        client.phone = payload.phone;
        client.lastvisit = payload.lastvisit;
        client.preferred_employee = payload.preferred_employee;
        client.notes = payload.notes;
        Ok(client.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.clients.len();
        tables.clients.retain(|c| c.id != id);
        if tables.clients.len() == before {
            return Err(client_not_found());
        }
        Ok(())
    }
}

fn newest_first(messages: &mut [Message]) {
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Message>> {
        let mut messages = self.tables.lock().unwrap().messages.clone();
        newest_first(&mut messages);
        Ok(messages)
    }

    async fn get(&self, id: i32) -> Result<Message> {
        let tables = self.tables.lock().unwrap();
        tables
            .messages
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(message_not_found)
    }

    async fn list_by_client(&self, client_id: i32) -> Result<Vec<Message>> {
        let mut messages: Vec<Message> = self
            .tables
            .lock()
            .unwrap()
            .messages
            .iter()
            .filter(|m| m.client_id == Some(client_id))
            .cloned()
            .collect();
        newest_first(&mut messages);
        Ok(messages)
    }

    async fn create(&self, payload: CreateMessagePayload) -> Result<Message> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_message_id += 1;
        let message = Message {
            id: tables.next_message_id,
            client_id: payload.client_id,
            content: payload.content,
            channel: payload.channel,
            direction: payload.direction,
            created_at: Utc::now(),
        };
        tables.messages.push(message.clone());
        Ok(message)
    }

    async fn update(&self, id: i32, payload: UpdateMessagePayload) -> Result<Message> {
        let mut tables = self.tables.lock().unwrap();
        let message = tables
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(message_not_found)?;
        message.content = payload.content;
        message.channel = payload.channel;
        message.direction = payload.direction;
        Ok(message.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.messages.len();
        tables.messages.retain(|m| m.id != id);
        if tables.messages.len() == before {
            return Err(message_not_found());
        }
        Ok(())
    }
}

/// Repository whose every query fails the way an exhausted pool does.
#[derive(Clone, Default)]
pub struct UnavailableStore;

pub const POOL_TIMEOUT_MESSAGE: &str = "pool timed out while waiting for an open connection";

fn pool_timed_out() -> Error {
    Error::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ClientRepository for UnavailableStore {
    async fn list(&self) -> Result<Vec<Client>> {
        Err(pool_timed_out())
    }

    async fn get(&self, _id: i32) -> Result<Client> {
        Err(pool_timed_out())
    }

    async fn find_by_phone(&self, _phone: &str) -> Result<Option<Client>> {
        Err(pool_timed_out())
    }

    async fn create(&self, _payload: ClientPayload) -> Result<Client> {
        Err(pool_timed_out())
    }

    async fn update(&self, _id: i32, _payload: ClientPayload) -> Result<Client> {
        Err(pool_timed_out())
    }

    async fn delete(&self, _id: i32) -> Result<()> {
        Err(pool_timed_out())
    }
}

#[async_trait]
impl MessageRepository for UnavailableStore {
    async fn list(&self) -> Result<Vec<Message>> {
        Err(pool_timed_out())
    }

    async fn get(&self, _id: i32) -> Result<Message> {
        Err(pool_timed_out())
    }

    async fn list_by_client(&self, _client_id: i32) -> Result<Vec<Message>> {
        Err(pool_timed_out())
    }

    async fn create(&self, _payload: CreateMessagePayload) -> Result<Message> {
        Err(pool_timed_out())
    }

    async fn update(&self, _id: i32, _payload: UpdateMessagePayload) -> Result<Message> {
        Err(pool_timed_out())
    }

    async fn delete(&self, _id: i32) -> Result<()> {
        Err(pool_timed_out())
    }
}

pub fn app_with(
    clients: Arc<dyn ClientRepository>,
    messages: Arc<dyn MessageRepository>,
) -> Router {
    let state = AppState::with_repositories(clients, messages, Some(VERIFY_TOKEN));
    asistu_backend::routes::router(state)
}

pub fn setup_app() -> (Router, MemoryStore) {
    let store = MemoryStore::default();
    let state = AppState::with_repositories(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Some(VERIFY_TOKEN),
    );
    (asistu_backend::routes::router(state), store)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            JsonValue::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}
