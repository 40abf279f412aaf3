use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Json},
};
use subtle::ConstantTimeEq;

use crate::{
    dto::webhook_dto::{VerifyQuery, WebhookStatusResponse},
    error::{Error, Result},
    utils::extract::AppQuery,
    AppState,
};

/// Any failure, including a body that is not a provider payload, answers
/// `500 {"error": "Webhook failed"}`.
#[utoipa::path(
    post,
    path = "/messages/webhook",
    request_body(content = String, description = "Provider notification payload", content_type = "application/json"),
    responses(
        (status = 200, description = "Delivery processed", body = WebhookStatusResponse),
        (status = 500, description = "Webhook failed")
    )
)]
#[axum::debug_handler]
pub async fn receive_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let outcome = state.webhook_ingestor.ingest(&body).await.map_err(|e| {
        tracing::error!(error = %e, "Webhook ingestion failed");
        Error::WebhookFailed
    })?;

    Ok(Json(WebhookStatusResponse {
        status: outcome.status().to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/messages/webhook",
    params(VerifyQuery),
    responses(
        (status = 200, description = "Challenge echoed", body = String),
        (status = 403, description = "Verification refused")
    )
)]
#[axum::debug_handler]
pub async fn verify_webhook(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<VerifyQuery>,
) -> Result<impl IntoResponse> {
    if query.mode.as_deref() != Some("subscribe") {
        return Err(Error::Forbidden("unexpected_hub_mode".into()));
    }
    let Some(expected) = state.webhook_verify_token.as_deref() else {
        tracing::warn!("Webhook verification requested but no verify token is configured");
        return Err(Error::Forbidden("verification_disabled".into()));
    };
    let provided = query.verify_token.unwrap_or_default();
    if !bool::from(ConstantTimeEq::ct_eq(provided.as_bytes(), expected.as_bytes())) {
        return Err(Error::Forbidden("invalid_verify_token".into()));
    }

    tracing::info!("Webhook callback verified");
    Ok(query.challenge.unwrap_or_default())
}
