use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod logging;

// ============================================================================
// Realtime Channel & Event Names
// ============================================================================

/// Named channels the simulation publishes to and clients subscribe on.
pub mod channels {
    /// Center snapshots and aggregate stats.
    pub const QUEUE_UPDATES: &str = "queue-updates";
    /// Per-center wait time deltas.
    pub const WAIT_TIMES: &str = "wait-times";
    /// Anomaly detections.
    pub const ANOMALY_ALERTS: &str = "anomaly-alerts";
}

/// Event names carried inside the realtime envelope.
pub mod events {
    pub const CENTERS_UPDATED: &str = "centers.updated";
    pub const WAIT_CHANGED: &str = "wait.changed";
    pub const ANOMALY_DETECTED: &str = "anomaly.detected";
}

// ============================================================================
// Realtime Message Envelope
// ============================================================================

/// The envelope published to the messaging provider and received by
/// client subscriptions. Field names are camelCase on the wire to match
/// the provider's JavaScript clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeMessage {
    /// Channel the message was published on.
    pub channel: String,
    /// Event name within the channel.
    pub event: String,
    /// JSON payload.
    pub payload: serde_json::Value,
    /// Publish timestamp.
    pub published_at: DateTime<Utc>,
}

impl RealtimeMessage {
    pub fn new(channel: &str, event: &str, payload: serde_json::Value) -> Self {
        Self {
            channel: channel.to_string(),
            event: event.to_string(),
            payload,
            published_at: Utc::now(),
        }
    }
}

/// Per-center wait time delta, published on the wait-times channel.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitTimeDelta {
    pub center_id: String,
    pub wait_minutes: u32,
    pub queue_length: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realtime_message_wire_format() {
        let msg = RealtimeMessage::new(
            channels::WAIT_TIMES,
            events::WAIT_CHANGED,
            serde_json::json!({"centerId": "c-1", "waitMinutes": 12}),
        );
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"channel\":\"wait-times\""));
        assert!(json.contains("\"event\":\"wait.changed\""));
        assert!(json.contains("publishedAt"));
    }

    #[test]
    fn test_wait_time_delta_round_trip() {
        let delta = WaitTimeDelta {
            center_id: "c-2".to_string(),
            wait_minutes: 8,
            queue_length: 3,
        };
        let json = serde_json::to_string(&delta).unwrap();
        assert!(json.contains("centerId"));
        let back: WaitTimeDelta = serde_json::from_str(&json).unwrap();
        assert_eq!(back.wait_minutes, 8);
    }
}
