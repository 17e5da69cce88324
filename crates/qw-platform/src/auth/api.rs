//! Auth API Endpoints
//!
//! - POST /signup - Create an account
//! - POST /login - Password-based login, sets the session cookie
//! - POST /logout - Clears the cookie and drops the session record
//! - GET /me - Current user info

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::auth::session::SessionService;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;
use crate::user::api::UserResponse;
use crate::user::entity::{PlanTier, User, UserRole};
use crate::user::store::UserStore;

/// Signup request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub plan: PlanTier,
    pub role: UserRole,
}

/// Auth API state
#[derive(Clone)]
pub struct AuthState {
    pub user_store: Arc<UserStore>,
    pub session_service: Arc<SessionService>,
    /// Session cookie name (default: "qw_session")
    pub session_cookie_name: String,
    /// Whether to set the Secure flag on the cookie
    pub session_cookie_secure: bool,
    /// SameSite policy for the cookie
    pub session_cookie_same_site: String,
}

impl AuthState {
    /// Create with default cookie settings
    pub fn new(user_store: Arc<UserStore>, session_service: Arc<SessionService>) -> Self {
        Self {
            user_store,
            session_service,
            session_cookie_name: "qw_session".to_string(),
            session_cookie_secure: false,
            session_cookie_same_site: "Lax".to_string(),
        }
    }

    /// Configure session cookie settings
    pub fn with_session_cookie_settings(
        mut self,
        name: &str,
        secure: bool,
        same_site: &str,
    ) -> Self {
        self.session_cookie_name = name.to_string();
        self.session_cookie_secure = secure;
        self.session_cookie_same_site = same_site.to_string();
        self
    }

    fn same_site(&self) -> SameSite {
        match self.session_cookie_same_site.to_lowercase().as_str() {
            "strict" => SameSite::Strict,
            "none" => SameSite::None,
            _ => SameSite::Lax,
        }
    }
}

/// Create a new account
///
/// Registers an unverified free-tier user keyed by email.
#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    operation_id = "postAuthSignup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn signup(
    State(state): State<AuthState>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, PlatformError> {
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(PlatformError::validation("a valid email is required"));
    }
    if req.password.len() < 8 {
        return Err(PlatformError::validation(
            "password must be at least 8 characters",
        ));
    }
    if req.name.trim().is_empty() {
        return Err(PlatformError::validation("name is required"));
    }

    let user = state
        .user_store
        .insert(User::new(req.email, req.password, req.name))?;

    tracing::info!(email = %user.email, "User signed up");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Login with email and password
///
/// Validates credentials against the user store and issues an opaque random
/// session token as an HttpOnly cookie with a one-week expiry.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    operation_id = "postAuthLogin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, PlatformError> {
    let user = state.user_store.authenticate(&req.email, &req.password)?;

    let session = state.session_service.create(&user.id, &user.email);

    let cookie = Cookie::build((state.session_cookie_name.clone(), session.token))
        .path("/")
        .http_only(true)
        .secure(state.session_cookie_secure)
        .same_site(state.same_site())
        .max_age(time::Duration::seconds(state.session_service.ttl_secs()))
        .build();

    let jar = jar.add(cookie);

    tracing::info!(email = %user.email, "User logged in");

    let response = LoginResponse {
        user_id: user.id,
        email: user.email,
        name: user.name,
        plan: user.plan,
        role: user.role,
    };

    Ok((jar, Json(response)))
}

/// Logout
///
/// Clears the session cookie and drops the server-side session record.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    operation_id = "postAuthLogout",
    responses(
        (status = 204, description = "Logout successful")
    )
)]
pub async fn logout(
    State(state): State<AuthState>,
    jar: CookieJar,
    auth: Authenticated,
) -> impl IntoResponse {
    state.session_service.revoke(&auth.token);

    // Expire the cookie immediately
    let cookie = Cookie::build((state.session_cookie_name.clone(), ""))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::ZERO)
        .build();

    let jar = jar.add(cookie);

    (jar, StatusCode::NO_CONTENT)
}

/// Get current user info
#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    operation_id = "getAuthMe",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthState>,
    auth: Authenticated,
) -> Result<Json<UserResponse>, PlatformError> {
    let user = state
        .user_store
        .find_by_id(&auth.user_id)
        .ok_or_else(|| PlatformError::unauthorized("Session user no longer exists"))?;
    Ok(Json(user.into()))
}

/// Create the auth router
pub fn auth_router(state: AuthState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(signup))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(get_current_user))
        .with_state(state)
}
