//! Insight Store

use parking_lot::RwLock;
use rand::Rng;

use super::entity::{Anomaly, WaitPrediction};

pub struct InsightStore {
    predictions: RwLock<Vec<WaitPrediction>>,
    anomalies: RwLock<Vec<Anomaly>>,
}

impl InsightStore {
    pub fn new(predictions: Vec<WaitPrediction>, anomalies: Vec<Anomaly>) -> Self {
        Self {
            predictions: RwLock::new(predictions),
            anomalies: RwLock::new(anomalies),
        }
    }

    pub fn predictions(&self) -> Vec<WaitPrediction> {
        self.predictions.read().clone()
    }

    pub fn anomalies(&self) -> Vec<Anomaly> {
        self.anomalies.read().clone()
    }

    /// Stamp one random anomaly with the current time and return it.
    /// Used by the simulation tick.
    pub fn stamp_random_anomaly<R: Rng>(&self, rng: &mut R) -> Option<Anomaly> {
        let mut anomalies = self.anomalies.write();
        if anomalies.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..anomalies.len());
        anomalies[index].detected_at = Some(chrono::Utc::now());
        Some(anomalies[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::entity::AnomalySeverity;

    #[test]
    fn test_stamp_random_anomaly() {
        let store = InsightStore::new(
            Vec::new(),
            vec![
                Anomaly::new("a-1", "c-1", "surge", "Sudden queue growth", AnomalySeverity::High),
                Anomaly::new("a-2", "c-2", "stall", "Queue not moving", AnomalySeverity::Medium),
            ],
        );

        let stamped = store.stamp_random_anomaly(&mut rand::thread_rng()).unwrap();
        assert!(stamped.detected_at.is_some());

        // The stamp is persisted in the store
        let stored = store
            .anomalies()
            .into_iter()
            .find(|a| a.id == stamped.id)
            .unwrap();
        assert_eq!(stored.detected_at, stamped.detected_at);
    }

    #[test]
    fn test_stamp_with_no_anomalies() {
        let store = InsightStore::new(Vec::new(), Vec::new());
        assert!(store.stamp_random_anomaly(&mut rand::thread_rng()).is_none());
    }
}
