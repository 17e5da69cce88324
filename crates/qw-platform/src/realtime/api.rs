//! Realtime Auth API Endpoint
//!
//! POST /auth - Mint a private-channel subscription signature for the
//! connected client. Requires an active session.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use qw_realtime::subscription_signature;

use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Realtime auth API state: the provider key pair, absent when the server
/// runs with the in-memory publisher
#[derive(Clone)]
pub struct RealtimeApiState {
    pub credentials: Option<RealtimeCredentials>,
}

#[derive(Clone)]
pub struct RealtimeCredentials {
    pub key: String,
    pub secret: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionAuthRequest {
    pub socket_id: String,
    pub channel_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionAuthResponse {
    /// Provider auth string, `key:hex(hmac_sha256(secret, "socket_id:channel"))`
    pub auth: String,
}

/// Authorize a private-channel subscription
#[utoipa::path(
    post,
    path = "/auth",
    tag = "realtime",
    operation_id = "authorizeSubscription",
    request_body = SubscriptionAuthRequest,
    responses(
        (status = 200, description = "Subscription signature", body = SubscriptionAuthResponse),
        (status = 400, description = "Missing socket id or channel name"),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Realtime provider not configured")
    )
)]
pub async fn authorize_subscription(
    State(state): State<RealtimeApiState>,
    _auth: Authenticated,
    Json(request): Json<SubscriptionAuthRequest>,
) -> Result<Json<SubscriptionAuthResponse>, PlatformError> {
    if request.socket_id.trim().is_empty() {
        return Err(PlatformError::validation("socketId is required"));
    }
    if request.channel_name.trim().is_empty() {
        return Err(PlatformError::validation("channelName is required"));
    }

    let credentials = state
        .credentials
        .as_ref()
        .ok_or_else(|| PlatformError::internal("Realtime provider is not configured"))?;

    let auth = subscription_signature(
        &credentials.key,
        &credentials.secret,
        &request.socket_id,
        &request.channel_name,
    );
    Ok(Json(SubscriptionAuthResponse { auth }))
}

/// Create the realtime auth router
pub fn realtime_router(state: RealtimeApiState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(authorize_subscription))
        .with_state(state)
}
