//! Appointment Store

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use super::entity::{Appointment, AppointmentStatus};

/// Process-lifetime appointment list with an incrementing id counter
pub struct AppointmentStore {
    appointments: RwLock<Vec<Appointment>>,
    next_id: AtomicU64,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self {
            appointments: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Append a new appointment and return it with its assigned id
    pub fn create(
        &self,
        user_id: &str,
        center_id: &str,
        date: &str,
        time: &str,
        purpose: &str,
    ) -> Appointment {
        let appointment = Appointment {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: user_id.to_string(),
            center_id: center_id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            purpose: purpose.to_string(),
            status: AppointmentStatus::Scheduled,
            created_at: chrono::Utc::now(),
        };
        self.appointments.write().push(appointment.clone());
        appointment
    }

    /// All appointments for one user
    pub fn for_user(&self, user_id: &str) -> Vec<Appointment> {
        self.appointments
            .read()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.appointments.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.read().is_empty()
    }
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increment() {
        let store = AppointmentStore::new();
        let a = store.create("u-1", "c-1", "2026-09-01", "09:30", "renewal");
        let b = store.create("u-1", "c-2", "2026-09-02", "10:00", "pickup");
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_for_user_filters() {
        let store = AppointmentStore::new();
        store.create("u-1", "c-1", "2026-09-01", "09:30", "renewal");
        store.create("u-2", "c-1", "2026-09-01", "10:00", "pickup");
        store.create("u-1", "c-2", "2026-09-03", "11:00", "consult");

        let mine = store.for_user("u-1");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|a| a.user_id == "u-1"));
    }
}
