//! Last-known state of each reference station
//!
//! Origins are the compiled-in station coordinates and never change.
//! Distance and message fragment are replaced together under one write lock,
//! so a reader never sees a distance paired with another update's fragment.

use std::collections::BTreeMap;

use nalgebra::Point2;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::core::StationName;
use crate::utils::ServiceConfig;

/// Snapshot of one station
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub name: StationName,
    pub origin: Point2<f64>,
    pub distance: Option<f64>,
    pub message: Vec<String>,
}

#[derive(Debug, Clone, Default)]
struct Report {
    distance: Option<f64>,
    message: Vec<String>,
}

/// Registry of the three stations, keyed by identity
#[derive(Debug)]
pub struct StationRegistry {
    reports: RwLock<BTreeMap<StationName, Report>>,
}

impl StationRegistry {
    /// Build the registry from configuration.
    ///
    /// Every station exists from the start. One missing from `config`
    /// starts with no distance and no fragment.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let reports: BTreeMap<_, _> = StationName::ALL
            .into_iter()
            .map(|name| {
                let report = config
                    .station(name)
                    .map(|station| Report {
                        distance: station.distance,
                        message: station.message.clone(),
                    })
                    .unwrap_or_default();
                (name, report)
            })
            .collect();

        info!(stations = reports.len(), "station registry initialized");
        Self {
            reports: RwLock::new(reports),
        }
    }

    /// Fixed reference coordinate of a station
    pub fn origin(&self, name: StationName) -> Point2<f64> {
        name.default_origin()
    }

    /// Current record of a station
    pub async fn get(&self, name: StationName) -> StationRecord {
        let reports = self.reports.read().await;
        self.record(name, reports.get(&name))
    }

    /// All stations in solver order
    pub async fn snapshot(&self) -> Vec<StationRecord> {
        let reports = self.reports.read().await;
        StationName::ALL
            .into_iter()
            .map(|name| self.record(name, reports.get(&name)))
            .collect()
    }

    /// Replace a station's distance and fragment in one step
    pub async fn replace(&self, name: StationName, distance: f64, message: Vec<String>) {
        self.replace_all([(name, distance, message)]).await;
    }

    /// Replace several stations under a single write lock
    pub async fn replace_all<I>(&self, updates: I)
    where
        I: IntoIterator<Item = (StationName, f64, Vec<String>)>,
    {
        let mut reports = self.reports.write().await;
        for (name, distance, message) in updates {
            debug!(station = %name, distance, tokens = message.len(), "replacing station report");
            reports.insert(
                name,
                Report {
                    distance: Some(distance),
                    message,
                },
            );
        }
    }

    fn record(&self, name: StationName, report: Option<&Report>) -> StationRecord {
        let report = report.cloned().unwrap_or_default();
        StationRecord {
            name,
            origin: self.origin(name),
            distance: report.distance,
            message: report.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registry_seeded_from_config() {
        let registry = StationRegistry::from_config(&ServiceConfig::default());

        let kenobi = registry.get(StationName::Kenobi).await;
        assert_eq!(kenobi.origin, Point2::new(-500.0, -200.0));
        assert_eq!(kenobi.distance, Some(150.0));
        assert_eq!(kenobi.message.len(), 5);
    }

    #[tokio::test]
    async fn test_missing_station_gets_defaults() {
        let mut config = ServiceConfig::default();
        config.stations.retain(|station| station.name != StationName::Sato);

        let registry = StationRegistry::from_config(&config);
        let sato = registry.get(StationName::Sato).await;

        assert_eq!(sato.origin, Point2::new(500.0, 100.0));
        assert_eq!(sato.distance, None);
        assert!(sato.message.is_empty());
    }

    #[tokio::test]
    async fn test_origins_ignore_seed_data() {
        let mut config = ServiceConfig::default();
        for station in &mut config.stations {
            station.distance = None;
            station.message.clear();
        }

        let registry = StationRegistry::from_config(&config);
        for record in registry.snapshot().await {
            assert_eq!(record.origin, record.name.default_origin());
        }
        assert_eq!(registry.origin(StationName::Kenobi), Point2::new(-500.0, -200.0));
    }

    #[tokio::test]
    async fn test_replace_updates_both_fields() {
        let registry = StationRegistry::from_config(&ServiceConfig::default());
        registry
            .replace(StationName::Skywalker, 42.5, vec!["a".to_string(), "b".to_string()])
            .await;

        let skywalker = registry.get(StationName::Skywalker).await;
        assert_eq!(skywalker.distance, Some(42.5));
        assert_eq!(skywalker.message, vec!["a", "b"]);
        assert_eq!(skywalker.origin, Point2::new(100.0, -100.0));

        // Others untouched
        assert_eq!(registry.get(StationName::Kenobi).await.distance, Some(150.0));
    }

    #[tokio::test]
    async fn test_snapshot_is_in_solver_order() {
        let registry = StationRegistry::from_config(&ServiceConfig::default());
        let names: Vec<_> = registry.snapshot().await.into_iter().map(|r| r.name).collect();

        assert_eq!(names, StationName::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_concurrent_updates_stay_paired() {
        let registry = std::sync::Arc::new(StationRegistry::from_config(&ServiceConfig::default()));

        let mut handles = Vec::new();
        for i in 0..32u32 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                registry
                    .replace(StationName::Kenobi, f64::from(i), vec![i.to_string()])
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let kenobi = registry.get(StationName::Kenobi).await;
        let distance = kenobi.distance.unwrap();
        assert_eq!(kenobi.message, vec![(distance as u32).to_string()]);
    }
}
