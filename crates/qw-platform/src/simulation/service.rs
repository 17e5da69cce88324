//! Simulation Service
//!
//! One tick rejitters every service center and the aggregate stats, stamps a
//! random anomaly with fixed probability, and republishes the results to the
//! realtime channels. Publish failures degrade to returning the computed data
//! without republishing; the store mutation has already happened by then.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use qw_common::{channels, events, WaitTimeDelta};
use qw_realtime::RealtimePublisher;

use crate::center::entity::{QueueStats, ServiceCenter};
use crate::center::store::CenterStore;
use crate::insight::entity::Anomaly;
use crate::insight::store::InsightStore;

/// Probability that a tick stamps an anomaly
const ANOMALY_PROBABILITY: f64 = 0.3;
/// Wait time jitter bound, minutes
const WAIT_JITTER: i64 = 5;
/// Queue length jitter bound
const QUEUE_JITTER: i64 = 3;
/// Aggregate stats jitter bound, minutes
const STATS_JITTER: i64 = 2;

/// Result of one simulation tick
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub centers: Vec<ServiceCenter>,
    pub stats: QueueStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<Anomaly>,
    /// False when the realtime publish failed and the data was only computed
    pub published: bool,
}

pub struct SimulationService {
    center_store: Arc<CenterStore>,
    insight_store: Arc<InsightStore>,
    publisher: Arc<dyn RealtimePublisher>,
}

impl SimulationService {
    pub fn new(
        center_store: Arc<CenterStore>,
        insight_store: Arc<InsightStore>,
        publisher: Arc<dyn RealtimePublisher>,
    ) -> Self {
        Self {
            center_store,
            insight_store,
            publisher,
        }
    }

    /// Run one tick: mutate the mock stores, then attempt to republish.
    pub async fn tick(&self) -> SimulationReport {
        // Scoped so the non-Send ThreadRng is gone before the publish await
        let (centers, stats, anomaly) = {
            let mut rng = rand::thread_rng();

            let centers: Vec<ServiceCenter> = self
                .center_store
                .all()
                .into_iter()
                .map(|c| jitter_center(c, &mut rng))
                .collect();
            let stats = jitter_stats(self.center_store.stats(), centers.len() as u32, &mut rng);

            self.center_store.replace_all(centers.clone());
            self.center_store.replace_stats(stats.clone());

            let anomaly = if rng.gen_bool(ANOMALY_PROBABILITY) {
                self.insight_store.stamp_random_anomaly(&mut rng)
            } else {
                None
            };
            (centers, stats, anomaly)
        };

        let published = match self.publish(&centers, &stats, anomaly.as_ref()).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Realtime publish failed; returning computed data");
                false
            }
        };

        info!(
            centers = centers.len(),
            anomaly = anomaly.is_some(),
            published,
            "Simulation tick complete"
        );

        SimulationReport {
            centers,
            stats,
            anomaly,
            published,
        }
    }

    async fn publish(
        &self,
        centers: &[ServiceCenter],
        stats: &QueueStats,
        anomaly: Option<&Anomaly>,
    ) -> qw_realtime::Result<()> {
        // Center snapshots + aggregate stats
        self.publisher
            .publish(
                channels::QUEUE_UPDATES,
                events::CENTERS_UPDATED,
                serde_json::json!({ "centers": centers, "stats": stats }),
            )
            .await?;

        // Per-center wait time deltas
        for center in centers {
            let delta = WaitTimeDelta {
                center_id: center.id.clone(),
                wait_minutes: center.current_wait_minutes,
                queue_length: center.queue_length,
            };
            self.publisher
                .publish(
                    channels::WAIT_TIMES,
                    events::WAIT_CHANGED,
                    serde_json::to_value(&delta)?,
                )
                .await?;
        }

        // Anomaly, when one was stamped this tick
        if let Some(anomaly) = anomaly {
            self.publisher
                .publish(
                    channels::ANOMALY_ALERTS,
                    events::ANOMALY_DETECTED,
                    serde_json::to_value(anomaly)?,
                )
                .await?;
        }

        Ok(())
    }
}

/// Jitter one center's live values; wait floored at 1, queue at 0
fn jitter_center<R: Rng>(mut center: ServiceCenter, rng: &mut R) -> ServiceCenter {
    let wait_delta = rng.gen_range(-WAIT_JITTER..=WAIT_JITTER);
    let queue_delta = rng.gen_range(-QUEUE_JITTER..=QUEUE_JITTER);

    center.current_wait_minutes =
        (center.current_wait_minutes as i64 + wait_delta).max(1) as u32;
    center.queue_length = (center.queue_length as i64 + queue_delta).max(0) as u32;
    center.updated_at = Utc::now();
    center
}

/// Jitter the aggregate stats with the same bounded-delta scheme
fn jitter_stats<R: Rng>(mut stats: QueueStats, centers_reporting: u32, rng: &mut R) -> QueueStats {
    let wait_delta = rng.gen_range(-STATS_JITTER..=STATS_JITTER);
    stats.average_wait_minutes = (stats.average_wait_minutes as i64 + wait_delta).max(1) as u32;
    stats.total_visitors_today += rng.gen_range(0..=8);
    stats.centers_reporting = centers_reporting;
    stats.updated_at = Utc::now();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_center_floors() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let center = jitter_center(ServiceCenter::new("c-1", "Edge", 1, 0), &mut rng);
            assert!(center.current_wait_minutes >= 1);
            // queue_length is unsigned; reaching here without a panic means
            // the subtraction never wrapped below zero
        }
    }

    #[test]
    fn test_jitter_stats_floors() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let stats = jitter_stats(QueueStats::new(1, 10, 2), 3, &mut rng);
            assert!(stats.average_wait_minutes >= 1);
            assert!(stats.total_visitors_today >= 10);
            assert_eq!(stats.centers_reporting, 3);
        }
    }
}
