//! Client View Projection
//!
//! Mirrors what the browser subscription hooks do: hold a local snapshot of
//! queue state and merge incoming channel deltas into it. Unknown events are
//! ignored so a newer server can publish event kinds an older client does not
//! understand.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use qw_common::{events, RealtimeMessage, WaitTimeDelta};

/// Per-center view state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterView {
    pub id: String,
    pub name: String,
    #[serde(alias = "currentWaitMinutes")]
    pub wait_minutes: u32,
    pub queue_length: u32,
}

/// Local queue snapshot maintained from the realtime feed
#[derive(Debug, Default)]
pub struct QueueView {
    centers: HashMap<String, CenterView>,
    stats: Option<serde_json::Value>,
    anomalies: Vec<serde_json::Value>,
}

impl QueueView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one incoming envelope into the snapshot
    pub fn apply(&mut self, message: &RealtimeMessage) {
        match message.event.as_str() {
            events::CENTERS_UPDATED => self.apply_centers_updated(&message.payload),
            events::WAIT_CHANGED => self.apply_wait_changed(&message.payload),
            events::ANOMALY_DETECTED => self.anomalies.push(message.payload.clone()),
            other => debug!(event = other, "Ignoring unknown realtime event"),
        }
    }

    fn apply_centers_updated(&mut self, payload: &serde_json::Value) {
        if let Some(centers) = payload.get("centers") {
            if let Ok(centers) = serde_json::from_value::<Vec<CenterView>>(centers.clone()) {
                for center in centers {
                    self.centers.insert(center.id.clone(), center);
                }
            }
        }
        if let Some(stats) = payload.get("stats") {
            self.stats = Some(stats.clone());
        }
    }

    fn apply_wait_changed(&mut self, payload: &serde_json::Value) {
        if let Ok(delta) = serde_json::from_value::<WaitTimeDelta>(payload.clone()) {
            if let Some(center) = self.centers.get_mut(&delta.center_id) {
                center.wait_minutes = delta.wait_minutes;
                center.queue_length = delta.queue_length;
            }
        }
    }

    pub fn center(&self, id: &str) -> Option<&CenterView> {
        self.centers.get(id)
    }

    pub fn centers(&self) -> impl Iterator<Item = &CenterView> {
        self.centers.values()
    }

    pub fn stats(&self) -> Option<&serde_json::Value> {
        self.stats.as_ref()
    }

    pub fn anomalies(&self) -> &[serde_json::Value] {
        &self.anomalies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qw_common::channels;

    fn snapshot_message() -> RealtimeMessage {
        RealtimeMessage::new(
            channels::QUEUE_UPDATES,
            events::CENTERS_UPDATED,
            serde_json::json!({
                "centers": [
                    {"id": "c-1", "name": "Downtown", "waitMinutes": 10, "queueLength": 5},
                    {"id": "c-2", "name": "Airport", "waitMinutes": 25, "queueLength": 12}
                ],
                "stats": {"averageWaitMinutes": 17}
            }),
        )
    }

    #[test]
    fn test_snapshot_then_delta_merge() {
        let mut view = QueueView::new();
        view.apply(&snapshot_message());
        assert_eq!(view.center("c-1").unwrap().wait_minutes, 10);

        view.apply(&RealtimeMessage::new(
            channels::WAIT_TIMES,
            events::WAIT_CHANGED,
            serde_json::json!({"centerId": "c-1", "waitMinutes": 3, "queueLength": 1}),
        ));

        let c1 = view.center("c-1").unwrap();
        assert_eq!(c1.wait_minutes, 3);
        assert_eq!(c1.queue_length, 1);
        // Untouched center keeps its snapshot values
        assert_eq!(view.center("c-2").unwrap().wait_minutes, 25);
        assert_eq!(view.stats().unwrap()["averageWaitMinutes"], 17);
    }

    #[test]
    fn test_delta_for_unknown_center_is_ignored() {
        let mut view = QueueView::new();
        view.apply(&RealtimeMessage::new(
            channels::WAIT_TIMES,
            events::WAIT_CHANGED,
            serde_json::json!({"centerId": "ghost", "waitMinutes": 3, "queueLength": 1}),
        ));
        assert!(view.center("ghost").is_none());
    }

    #[test]
    fn test_anomalies_accumulate() {
        let mut view = QueueView::new();
        view.apply(&RealtimeMessage::new(
            channels::ANOMALY_ALERTS,
            events::ANOMALY_DETECTED,
            serde_json::json!({"id": "a-1", "kind": "surge"}),
        ));
        view.apply(&RealtimeMessage::new(
            channels::ANOMALY_ALERTS,
            events::ANOMALY_DETECTED,
            serde_json::json!({"id": "a-2", "kind": "stall"}),
        ));
        assert_eq!(view.anomalies().len(), 2);
    }

    #[test]
    fn test_unknown_event_ignored() {
        let mut view = QueueView::new();
        view.apply(&RealtimeMessage::new(
            channels::QUEUE_UPDATES,
            "centers.v2_updated",
            serde_json::json!({}),
        ));
        assert_eq!(view.centers().count(), 0);
    }
}
