//! Service Centers API Endpoints
//!
//! - GET / - List centers with live queue state
//! - GET /{id} - Fetch one center
//!
//! Aggregate stats live on a separate router so the server can mount them
//! at the API root rather than under the centers prefix.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::entity::{QueueStats, ServiceCenter};
use super::store::CenterStore;
use crate::shared::error::PlatformError;

/// Centers API state
#[derive(Clone)]
pub struct CentersState {
    pub center_store: Arc<CenterStore>,
}

/// List all service centers
#[utoipa::path(
    get,
    path = "/",
    tag = "centers",
    operation_id = "getCenters",
    responses(
        (status = 200, description = "All centers", body = [ServiceCenter])
    )
)]
pub async fn list_centers(State(state): State<CentersState>) -> Json<Vec<ServiceCenter>> {
    Json(state.center_store.all())
}

/// Get a center by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "centers",
    operation_id = "getCenterById",
    params(
        ("id" = String, Path, description = "Center id")
    ),
    responses(
        (status = 200, description = "The center", body = ServiceCenter),
        (status = 404, description = "Unknown center")
    )
)]
pub async fn get_center(
    State(state): State<CentersState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceCenter>, PlatformError> {
    Ok(Json(state.center_store.find_by_id(&id)?))
}

/// Aggregate queue statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    operation_id = "getQueueStats",
    responses(
        (status = 200, description = "Current stats", body = QueueStats)
    )
)]
pub async fn get_stats(State(state): State<CentersState>) -> Json<QueueStats> {
    Json(state.center_store.stats())
}

/// Create the centers router
pub fn centers_router(state: CentersState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_centers))
        .routes(routes!(get_center))
        .with_state(state)
}

/// Create the aggregate stats router, mounted at the API root
pub fn stats_router(state: CentersState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_stats))
        .with_state(state)
}
