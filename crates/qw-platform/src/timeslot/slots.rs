//! Time Slot Generator
//!
//! Half-hour slots between 09:00 and 17:00, generated on demand for a
//! date/center pair with randomized availability. Same-day slots are less
//! likely to be free than future ones, reflecting that today's queue is
//! already partly booked.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const OPEN_HOUR: u8 = 9;
const CLOSE_HOUR: u8 = 17;

/// Availability probability for slots on the request day
pub const SAME_DAY_AVAILABILITY: f64 = 0.45;
/// Availability probability for future dates
pub const FUTURE_AVAILABILITY: f64 = 0.75;

/// One bookable half-hour slot
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Slot start, HH:MM
    pub start: String,
    /// Slot end, HH:MM
    pub end: String,
    pub available: bool,
}

/// Generate the slot grid for a date. `today` decides which availability
/// probability applies.
pub fn generate_slots<R: Rng>(date: NaiveDate, today: NaiveDate, rng: &mut R) -> Vec<TimeSlot> {
    let availability = if date <= today {
        SAME_DAY_AVAILABILITY
    } else {
        FUTURE_AVAILABILITY
    };

    let mut slots = Vec::with_capacity(((CLOSE_HOUR - OPEN_HOUR) as usize) * 2);
    for hour in OPEN_HOUR..CLOSE_HOUR {
        for half in [0u8, 30] {
            let (end_hour, end_minute) = if half == 0 { (hour, 30) } else { (hour + 1, 0) };
            slots.push(TimeSlot {
                start: format!("{:02}:{:02}", hour, half),
                end: format!("{:02}:{:02}", end_hour, end_minute),
                available: rng.gen_bool(availability),
            });
        }
    }
    slots
}
