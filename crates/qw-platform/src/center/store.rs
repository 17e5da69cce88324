//! Center Store
//!
//! Process-wide mock arrays for centers and aggregate stats. Concurrent
//! requests may interleave between reads and simulation writes; each value
//! is individually consistent behind its lock and the worst case is a stale
//! jitter value.

use parking_lot::RwLock;

use super::entity::{QueueStats, ServiceCenter};
use crate::shared::error::{PlatformError, Result};

pub struct CenterStore {
    centers: RwLock<Vec<ServiceCenter>>,
    stats: RwLock<QueueStats>,
}

impl CenterStore {
    pub fn new(centers: Vec<ServiceCenter>, stats: QueueStats) -> Self {
        Self {
            centers: RwLock::new(centers),
            stats: RwLock::new(stats),
        }
    }

    pub fn all(&self) -> Vec<ServiceCenter> {
        self.centers.read().clone()
    }

    pub fn find_by_id(&self, id: &str) -> Result<ServiceCenter> {
        self.centers
            .read()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| PlatformError::not_found("ServiceCenter", id))
    }

    pub fn stats(&self) -> QueueStats {
        self.stats.read().clone()
    }

    /// Replace every center's live values; used by the simulation tick
    pub fn replace_all(&self, centers: Vec<ServiceCenter>) {
        *self.centers.write() = centers;
    }

    pub fn replace_stats(&self, stats: QueueStats) {
        *self.stats.write() = stats;
    }

    pub fn len(&self) -> usize {
        self.centers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.read().is_empty()
    }
}
