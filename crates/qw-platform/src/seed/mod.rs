//! Demo Data Seeding
//!
//! Populates the in-memory stores with the fixed demo dataset used in dev
//! mode: one demo account, five service centers with plausible queue state,
//! and a handful of predictions and anomalies for the insights endpoints.

use std::sync::Arc;

use tracing::info;

use crate::center::entity::{QueueStats, ServiceCenter};
use crate::center::store::CenterStore;
use crate::insight::entity::{Anomaly, AnomalySeverity, WaitPrediction};
use crate::insight::store::InsightStore;
use crate::user::entity::{PlanTier, PreferredWindow, User, UserPreferences, VisitRecord};
use crate::user::store::UserStore;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password123";

/// The demo account, fully populated so every recommendation heuristic
/// has something to work with
pub fn demo_user() -> User {
    User::new(DEMO_EMAIL, DEMO_PASSWORD, "Demo User")
        .with_plan(PlanTier::Pro)
        .verified()
        .with_preferences(UserPreferences {
            preferred_center_id: Some("center-2".to_string()),
            preferred_windows: vec![
                PreferredWindow {
                    day_of_week: 1,
                    start_hour: 9,
                    end_hour: 11,
                },
                PreferredWindow {
                    day_of_week: 3,
                    start_hour: 14,
                    end_hour: 16,
                },
            ],
        })
        .with_visit_history(vec![
            VisitRecord {
                center_id: "center-1".to_string(),
                center_name: "Downtown Service Center".to_string(),
                date: "2026-07-14".to_string(),
                wait_minutes: 12,
            },
            VisitRecord {
                center_id: "center-3".to_string(),
                center_name: "Riverside Branch".to_string(),
                date: "2026-07-28".to_string(),
                wait_minutes: 8,
            },
            VisitRecord {
                center_id: "center-2".to_string(),
                center_name: "Airport Kiosk".to_string(),
                date: "2026-08-05".to_string(),
                wait_minutes: 21,
            },
        ])
}

pub fn seed_user_store() -> Arc<UserStore> {
    let store = UserStore::new();
    // Insert cannot collide in a fresh store
    let _ = store.insert(demo_user());
    info!(email = DEMO_EMAIL, "Seeded demo user");
    Arc::new(store)
}

pub fn seed_center_store() -> Arc<CenterStore> {
    let centers = vec![
        ServiceCenter::new("center-1", "Downtown Service Center", 18, 9),
        ServiceCenter::new("center-2", "Airport Kiosk", 32, 17),
        ServiceCenter::new("center-3", "Riverside Branch", 7, 3),
        ServiceCenter::new("center-4", "Northgate Mall", 24, 11),
        ServiceCenter::new("center-5", "University Campus", 12, 6),
    ];
    let stats = QueueStats::new(19, 148, centers.len() as u32);
    info!(centers = centers.len(), "Seeded service centers");
    Arc::new(CenterStore::new(centers, stats))
}

pub fn seed_insight_store() -> Arc<InsightStore> {
    let predictions = vec![
        WaitPrediction {
            center_id: "center-1".to_string(),
            horizon_minutes: 30,
            predicted_wait_minutes: 22,
            confidence: 0.78,
        },
        WaitPrediction {
            center_id: "center-2".to_string(),
            horizon_minutes: 30,
            predicted_wait_minutes: 27,
            confidence: 0.64,
        },
        WaitPrediction {
            center_id: "center-3".to_string(),
            horizon_minutes: 60,
            predicted_wait_minutes: 10,
            confidence: 0.81,
        },
        WaitPrediction {
            center_id: "center-4".to_string(),
            horizon_minutes: 60,
            predicted_wait_minutes: 19,
            confidence: 0.7,
        },
    ];
    let anomalies = vec![
        Anomaly::new(
            "anomaly-1",
            "center-2",
            "surge",
            "Queue grew unusually fast over the last interval",
            AnomalySeverity::High,
        ),
        Anomaly::new(
            "anomaly-2",
            "center-4",
            "stall",
            "Queue has not advanced for several intervals",
            AnomalySeverity::Medium,
        ),
        Anomaly::new(
            "anomaly-3",
            "center-1",
            "staffing",
            "Fewer desks open than scheduled",
            AnomalySeverity::Low,
        ),
    ];
    info!(
        predictions = predictions.len(),
        anomalies = anomalies.len(),
        "Seeded insights"
    );
    Arc::new(InsightStore::new(predictions, anomalies))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_user_credentials() {
        let store = seed_user_store();
        assert!(store.authenticate(DEMO_EMAIL, DEMO_PASSWORD).is_ok());
        assert!(store.authenticate(DEMO_EMAIL, "wrong").is_err());
    }

    #[test]
    fn test_seeded_centers_reference_exists() {
        let centers = seed_center_store();
        let user = demo_user();
        let preferred = user.preferences.preferred_center_id.unwrap();
        assert!(centers.find_by_id(&preferred).is_ok());
        for visit in &user.visit_history {
            assert!(centers.find_by_id(&visit.center_id).is_ok());
        }
    }

    #[test]
    fn test_seeded_insights_nonempty() {
        let insights = seed_insight_store();
        assert!(!insights.predictions().is_empty());
        assert!(!insights.anomalies().is_empty());
    }
}
