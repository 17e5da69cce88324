//! User Profile API Endpoints
//!
//! - GET /profile - Current user's profile
//! - PUT /profile - Update name / plan / preferences
//! - PUT /password - Change password
//! - GET /debug - Dev listing of all users (passwords redacted)

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::entity::{PlanTier, User, UserPreferences, UserRole, VisitRecord};
use super::store::UserStore;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;

/// User response DTO, never carries the password
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub plan: PlanTier,
    pub verified: bool,
    pub role: UserRole,
    pub preferences: UserPreferences,
    pub visit_history: Vec<VisitRecord>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            plan: u.plan,
            verified: u.verified,
            role: u.role,
            preferences: u.preferences,
            visit_history: u.visit_history,
            created_at: u.created_at.to_rfc3339(),
            updated_at: u.updated_at.to_rfc3339(),
        }
    }
}

/// Profile update request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub plan: Option<PlanTier>,
    pub preferences: Option<UserPreferences>,
}

/// Password change request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Users API state
#[derive(Clone)]
pub struct UsersState {
    pub user_store: Arc<UserStore>,
    /// Expose the debug listing (dev mode only)
    pub debug_listing_enabled: bool,
}

/// Get the current user's profile
#[utoipa::path(
    get,
    path = "/profile",
    tag = "users",
    operation_id = "getUserProfile",
    responses(
        (status = 200, description = "Current profile", body = UserResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_profile(
    State(state): State<UsersState>,
    auth: Authenticated,
) -> Result<Json<UserResponse>, PlatformError> {
    let user = state
        .user_store
        .find_by_id(&auth.user_id)
        .ok_or_else(|| PlatformError::not_found("User", &auth.user_id))?;
    Ok(Json(user.into()))
}

/// Update the current user's profile
#[utoipa::path(
    put,
    path = "/profile",
    tag = "users",
    operation_id = "putUserProfile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn update_profile(
    State(state): State<UsersState>,
    auth: Authenticated,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, PlatformError> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(PlatformError::validation("name must not be empty"));
        }
    }

    let updated = state
        .user_store
        .update_profile(&auth.user_id, req.name, req.plan, req.preferences)?;
    Ok(Json(updated.into()))
}

/// Change the current user's password
#[utoipa::path(
    put,
    path = "/password",
    tag = "users",
    operation_id = "putUserPassword",
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = SuccessResponse),
        (status = 400, description = "New password invalid"),
        (status = 401, description = "Current password incorrect")
    )
)]
pub async fn update_password(
    State(state): State<UsersState>,
    auth: Authenticated,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if req.new_password.len() < 8 {
        return Err(PlatformError::validation(
            "new password must be at least 8 characters",
        ));
    }

    state
        .user_store
        .update_password(&auth.user_id, &req.current_password, &req.new_password)?;
    Ok(Json(SuccessResponse::with_message("Password updated")))
}

/// List all users (dev only, passwords redacted)
#[utoipa::path(
    get,
    path = "/debug",
    tag = "users",
    operation_id = "getDebugUsers",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 403, description = "Debug listing disabled")
    )
)]
pub async fn debug_users(
    State(state): State<UsersState>,
) -> Result<Json<Vec<UserResponse>>, PlatformError> {
    if !state.debug_listing_enabled {
        return Err(PlatformError::Forbidden {
            message: "Debug listing is disabled outside dev mode".to_string(),
        });
    }
    let users = state.user_store.all().into_iter().map(UserResponse::from).collect();
    Ok(Json(users))
}

/// Create the users router
pub fn users_router(state: UsersState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_profile, update_profile))
        .routes(routes!(update_password))
        .routes(routes!(debug_users))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_redacts_password() {
        let user = User::new("a@b.c", "supersecret", "A");
        let response: UserResponse = user.into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("supersecret"));
        assert!(json.contains("a@b.c"));
    }

    #[test]
    fn test_update_profile_request_deserialization() {
        let json = r#"{"name":"New","plan":"PRO","preferences":{"preferredCenterId":"c-1"}}"#;
        let req: UpdateProfileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name.as_deref(), Some("New"));
        assert_eq!(req.plan, Some(PlanTier::Pro));
        assert_eq!(
            req.preferences.unwrap().preferred_center_id.as_deref(),
            Some("c-1")
        );
    }
}
