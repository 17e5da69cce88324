//! API Middleware
//!
//! Session extraction for Axum handlers. Supports the session cookie and a
//! Bearer token carrying the same opaque session token.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, header::COOKIE, request::Parts, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use crate::auth::session::{Session, SessionService};
use crate::shared::api_common::ApiError;
use crate::user::store::UserStore;

/// Default session cookie name
pub const SESSION_COOKIE_NAME: &str = "qw_session";

/// Application state inserted into request extensions by the server
#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub user_store: Arc<UserStore>,
    pub session_cookie_name: String,
}

impl AppState {
    pub fn new(session_service: Arc<SessionService>, user_store: Arc<UserStore>) -> Self {
        Self {
            session_service,
            user_store,
            session_cookie_name: SESSION_COOKIE_NAME.to_string(),
        }
    }

    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.session_cookie_name = name.into();
        self
    }
}

/// Authenticated session extractor
pub struct Authenticated(pub Session);

impl std::ops::Deref for Authenticated {
    type Target = Session;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Error response for authentication failures
pub struct AuthError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ApiError {
            error: "UNAUTHORIZED".to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Extract the session token from the named cookie
fn extract_session_cookie(parts: &Parts, cookie_name: &str) -> Option<String> {
    parts
        .headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split(';')
                .map(|c| c.trim())
                .find(|c| c.starts_with(cookie_name))
                .and_then(|c| c.split('=').nth(1))
                .map(|v| v.to_string())
        })
}

/// Extract a Bearer token from the Authorization header
fn extract_bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.to_string())
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts
            .extensions
            .get::<AppState>()
            .cloned()
            .ok_or_else(|| AuthError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Session service not configured".to_string(),
            })?;

        let token = extract_bearer_token(parts)
            .or_else(|| extract_session_cookie(parts, &app_state.session_cookie_name))
            .ok_or_else(|| AuthError {
                status: StatusCode::UNAUTHORIZED,
                message: "Missing session token".to_string(),
            })?;

        let session = app_state.session_service.validate(&token).map_err(|e| AuthError {
            status: StatusCode::UNAUTHORIZED,
            message: e.to_string(),
        })?;

        Ok(Authenticated(session))
    }
}
