//! Service Center Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A mock physical/virtual location with an associated queue.
///
/// Wait time is floored at 1 minute and queue length at 0; the simulation
/// tick maintains those bounds when it jitters the values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCenter {
    pub id: String,
    pub name: String,
    pub current_wait_minutes: u32,
    pub queue_length: u32,
    pub updated_at: DateTime<Utc>,
}

impl ServiceCenter {
    pub fn new(id: impl Into<String>, name: impl Into<String>, wait: u32, queue: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_wait_minutes: wait.max(1),
            queue_length: queue,
            updated_at: Utc::now(),
        }
    }
}

/// Aggregate queue statistics across all centers
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueStats {
    pub average_wait_minutes: u32,
    pub total_visitors_today: u32,
    pub centers_reporting: u32,
    pub updated_at: DateTime<Utc>,
}

impl QueueStats {
    pub fn new(average_wait: u32, visitors: u32, centers: u32) -> Self {
        Self {
            average_wait_minutes: average_wait.max(1),
            total_visitors_today: visitors,
            centers_reporting: centers,
            updated_at: Utc::now(),
        }
    }
}
