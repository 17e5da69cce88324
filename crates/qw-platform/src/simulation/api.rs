//! Simulation API Endpoint
//!
//! POST /tick - Run one mock data perturbation and republish

use axum::{extract::State, Json};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::service::{SimulationReport, SimulationService};

/// Simulation API state
#[derive(Clone)]
pub struct SimulationState {
    pub service: Arc<SimulationService>,
}

/// Run one simulation tick
#[utoipa::path(
    post,
    path = "/tick",
    tag = "simulation",
    operation_id = "runSimulationTick",
    responses(
        (status = 200, description = "Tick result; published is false when the realtime publish failed", body = SimulationReport)
    )
)]
pub async fn run_tick(State(state): State<SimulationState>) -> Json<SimulationReport> {
    Json(state.service.tick().await)
}

/// Create the simulation router
pub fn simulation_router(state: SimulationState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(run_tick))
        .with_state(state)
}
