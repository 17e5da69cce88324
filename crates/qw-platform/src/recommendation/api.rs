//! Recommendations API Endpoint
//!
//! GET / - Up to four visit suggestions for the current user

use axum::{extract::State, Json};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::service::{recommend, Recommendation};
use crate::center::store::CenterStore;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;
use crate::user::store::UserStore;

/// Recommendations API state
#[derive(Clone)]
pub struct RecommendationsState {
    pub user_store: Arc<UserStore>,
    pub center_store: Arc<CenterStore>,
}

/// Visit suggestions for the current user
#[utoipa::path(
    get,
    path = "/",
    tag = "recommendations",
    operation_id = "getRecommendations",
    responses(
        (status = 200, description = "Suggestions, at most four", body = [Recommendation]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_recommendations(
    State(state): State<RecommendationsState>,
    auth: Authenticated,
) -> Result<Json<Vec<Recommendation>>, PlatformError> {
    let user = state
        .user_store
        .find_by_id(&auth.user_id)
        .ok_or_else(|| PlatformError::not_found("User", &auth.user_id))?;

    let centers = state.center_store.all();
    Ok(Json(recommend(&user, &centers, chrono::Utc::now())))
}

/// Create the recommendations router
pub fn recommendations_router(state: RecommendationsState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_recommendations))
        .with_state(state)
}
