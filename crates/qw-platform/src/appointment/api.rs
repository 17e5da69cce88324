//! Appointments API Endpoints
//!
//! - GET / - Current user's appointments
//! - POST / - Book an appointment (400 on missing fields, 201 on success)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::entity::Appointment;
use super::store::AppointmentStore;
use crate::center::store::CenterStore;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;

/// Appointment creation request.
///
/// Every field is required; optionals exist so missing fields surface as a
/// 400 validation error rather than a body-deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub center_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub purpose: Option<String>,
}

/// Appointments API state
#[derive(Clone)]
pub struct AppointmentsState {
    pub appointment_store: Arc<AppointmentStore>,
    pub center_store: Arc<CenterStore>,
}

/// List the current user's appointments
#[utoipa::path(
    get,
    path = "/",
    tag = "appointments",
    operation_id = "getAppointments",
    responses(
        (status = 200, description = "Appointments for the current user", body = [Appointment]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_appointments(
    State(state): State<AppointmentsState>,
    auth: Authenticated,
) -> Json<Vec<Appointment>> {
    Json(state.appointment_store.for_user(&auth.user_id))
}

/// Book an appointment
#[utoipa::path(
    post,
    path = "/",
    tag = "appointments",
    operation_id = "postAppointment",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Appointment created", body = Appointment),
        (status = 400, description = "Missing required field"),
        (status = 404, description = "Unknown center")
    )
)]
pub async fn create_appointment(
    State(state): State<AppointmentsState>,
    auth: Authenticated,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, PlatformError> {
    let center_id = required(req.center_id, "centerId")?;
    let date = required(req.date, "date")?;
    let time = required(req.time, "time")?;
    let purpose = required(req.purpose, "purpose")?;

    if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        return Err(PlatformError::validation("date must be YYYY-MM-DD"));
    }

    // The center must exist
    state.center_store.find_by_id(&center_id)?;

    let appointment = state
        .appointment_store
        .create(&auth.user_id, &center_id, &date, &time, &purpose);

    tracing::info!(
        appointment_id = appointment.id,
        center_id = %center_id,
        "Appointment booked"
    );

    Ok((StatusCode::CREATED, Json(appointment)))
}

fn required(value: Option<String>, field: &str) -> Result<String, PlatformError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PlatformError::validation(format!("{field} is required"))),
    }
}

/// Create the appointments router
pub fn appointments_router(state: AppointmentsState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_appointments, create_appointment))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_check() {
        assert!(required(Some("x".to_string()), "f").is_ok());
        assert!(required(Some("  ".to_string()), "f").is_err());
        assert!(required(None, "f").is_err());
    }

    #[test]
    fn test_request_with_missing_fields_deserializes() {
        // Partial bodies must reach the handler so it can answer 400
        let req: CreateAppointmentRequest =
            serde_json::from_str(r#"{"centerId":"c-1"}"#).unwrap();
        assert!(req.date.is_none());
        assert!(req.purpose.is_none());
    }
}
