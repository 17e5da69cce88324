//! Time slot generation: computed per request, never stored

pub mod api;
pub mod slots;

pub use api::{timeslots_router, TimeSlotsState};
pub use slots::{generate_slots, TimeSlot};
