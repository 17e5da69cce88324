//! Appointment aggregate: process-lifetime bookings

pub mod api;
pub mod entity;
pub mod store;

pub use api::{appointments_router, AppointmentsState};
pub use entity::{Appointment, AppointmentStatus};
pub use store::AppointmentStore;
