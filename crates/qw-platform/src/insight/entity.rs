//! Insight Entities
//!
//! Static mock structures: wait-time predictions and flagged queue anomalies.
//! Read-only except for the anomaly detection timestamp, which the simulation
//! occasionally stamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Predicted wait time for a center at a future horizon
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitPrediction {
    pub center_id: String,
    /// Minutes into the future this prediction applies to
    pub horizon_minutes: u32,
    pub predicted_wait_minutes: u32,
    /// 0.0 - 1.0
    pub confidence: f64,
}

/// Anomaly severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalySeverity {
    Low,
    Medium,
    High,
}

/// A flagged irregular queue condition from the mock list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub id: String,
    pub center_id: String,
    /// Short machine-readable kind, e.g. "surge" or "stall"
    pub kind: String,
    pub description: String,
    pub severity: AnomalySeverity,
    /// Stamped by the simulation tick; None until first detected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_at: Option<DateTime<Utc>>,
}

impl Anomaly {
    pub fn new(
        id: impl Into<String>,
        center_id: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
        severity: AnomalySeverity,
    ) -> Self {
        Self {
            id: id.into(),
            center_id: center_id.into(),
            kind: kind.into(),
            description: description.into(),
            severity,
            detected_at: None,
        }
    }
}
