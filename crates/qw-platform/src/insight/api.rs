//! Insights API Endpoints
//!
//! - GET /predictions - Wait-time predictions
//! - GET /anomalies - Flagged queue anomalies

use axum::{extract::State, Json};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::entity::{Anomaly, WaitPrediction};
use super::store::InsightStore;

/// Insights API state
#[derive(Clone)]
pub struct InsightsState {
    pub insight_store: Arc<InsightStore>,
}

/// List wait-time predictions
#[utoipa::path(
    get,
    path = "/predictions",
    tag = "insights",
    operation_id = "getPredictions",
    responses(
        (status = 200, description = "Predictions", body = [WaitPrediction])
    )
)]
pub async fn list_predictions(State(state): State<InsightsState>) -> Json<Vec<WaitPrediction>> {
    Json(state.insight_store.predictions())
}

/// List anomalies
#[utoipa::path(
    get,
    path = "/anomalies",
    tag = "insights",
    operation_id = "getAnomalies",
    responses(
        (status = 200, description = "Anomalies", body = [Anomaly])
    )
)]
pub async fn list_anomalies(State(state): State<InsightsState>) -> Json<Vec<Anomaly>> {
    Json(state.insight_store.anomalies())
}

/// Create the insights router
pub fn insights_router(state: InsightsState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_predictions))
        .routes(routes!(list_anomalies))
        .with_state(state)
}
