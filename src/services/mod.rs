pub mod client_service;
pub mod message_service;
pub mod webhook_service;
