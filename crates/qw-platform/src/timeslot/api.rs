//! Time Slots API Endpoint
//!
//! GET /?date=YYYY-MM-DD&centerId=... - slot grid for a date/center pair

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::{router::OpenApiRouter, routes};

use super::slots::{generate_slots, TimeSlot};
use crate::center::store::CenterStore;
use crate::shared::error::PlatformError;

/// Time slot query parameters
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TimeSlotQuery {
    /// Visit date, YYYY-MM-DD
    pub date: String,
    /// Center id
    pub center_id: String,
}

/// Time slot response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotResponse {
    pub center_id: String,
    pub date: String,
    pub slots: Vec<TimeSlot>,
}

/// Time slots API state
#[derive(Clone)]
pub struct TimeSlotsState {
    pub center_store: Arc<CenterStore>,
}

/// Generate time slots for a date and center
#[utoipa::path(
    get,
    path = "/",
    tag = "timeslots",
    operation_id = "getTimeSlots",
    params(TimeSlotQuery),
    responses(
        (status = 200, description = "Slot grid", body = TimeSlotResponse),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "Unknown center")
    )
)]
pub async fn get_timeslots(
    State(state): State<TimeSlotsState>,
    Query(query): Query<TimeSlotQuery>,
) -> Result<Json<TimeSlotResponse>, PlatformError> {
    let date = chrono::NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| PlatformError::validation("date must be YYYY-MM-DD"))?;

    state.center_store.find_by_id(&query.center_id)?;

    let today = chrono::Utc::now().date_naive();
    let slots = generate_slots(date, today, &mut rand::thread_rng());

    Ok(Json(TimeSlotResponse {
        center_id: query.center_id,
        date: query.date,
        slots,
    }))
}

/// Create the timeslots router
pub fn timeslots_router(state: TimeSlotsState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_timeslots))
        .with_state(state)
}
