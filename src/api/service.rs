//! Orchestration of the combined and split workflows
//!
//! The service owns the [`StationRegistry`] and turns already-parsed reports
//! into calls to the solver and the merger. It knows nothing about HTTP.

use nalgebra::Point2;
use tracing::{debug, info, warn};

use crate::algorithms::{is_complete, merge, solve, station_view, MergedMessage};
use crate::api::error::ServiceError;
use crate::api::types::StationReport;
use crate::core::{Position, Reading, StationName};
use crate::registry::{StationRecord, StationRegistry};
use crate::utils::ServiceConfig;

/// Transmitter fix with its reconstructed message
#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    pub position: Point2<f64>,
    pub message: MergedMessage,
}

/// One station's own view: its fixed origin and its own fragment
#[derive(Debug, Clone, PartialEq)]
pub struct StationView {
    pub origin: Point2<f64>,
    /// Joined fragment, or the insufficient-information marker
    pub message: String,
    pub complete: bool,
}

pub struct TopSecretService {
    registry: StationRegistry,
}

impl TopSecretService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            registry: StationRegistry::from_config(config),
        }
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// Combined mode: locate the transmitter from three reports.
    ///
    /// Reports are taken positionally as stations A, B and C; their names
    /// do not reorder them. On success every report naming a known station
    /// is written back to the registry.
    pub async fn locate(&self, reports: &[StationReport]) -> Result<Located, ServiceError> {
        let readings: Vec<Reading> = StationName::ALL
            .iter()
            .zip(reports)
            .map(|(name, report)| Reading::new(self.registry.origin(*name), report.distance))
            .collect();

        // zip stops at three; a longer request must still fail the count check
        let readings = if reports.len() == readings.len() {
            readings
        } else {
            Vec::new()
        };

        let Position::Resolved(position) = solve(&readings) else {
            warn!(reports = reports.len(), "combined request could not be resolved");
            return Err(ServiceError::PositionUnresolved {
                readings: reports.len(),
            });
        };

        let fragments: Vec<&[String]> = reports.iter().map(|report| report.message.as_slice()).collect();
        let message = merge(&fragments);

        let updates: Vec<_> = reports
            .iter()
            .filter_map(|report| match report.name.parse::<StationName>() {
                Ok(name) => report
                    .distance
                    .map(|distance| (name, distance, report.message.clone())),
                Err(err) => {
                    debug!(%err, "skipping write-back for unknown station");
                    None
                }
            })
            .collect();
        self.registry.replace_all(updates).await;

        info!(
            x = position.x,
            y = position.y,
            complete = message.is_complete(),
            "transmitter located"
        );
        Ok(Located { position, message })
    }

    /// Split mode: combine whatever the registry currently holds
    pub async fn locate_from_registry(&self) -> Result<Located, ServiceError> {
        let records = self.registry.snapshot().await;
        let readings: Vec<Reading> = records
            .iter()
            .map(|record| Reading::new(record.origin, record.distance))
            .collect();

        let Position::Resolved(position) = solve(&readings) else {
            warn!("stored station reports are not enough to resolve a position");
            return Err(ServiceError::PositionUnresolved {
                readings: records.iter().filter(|r| r.distance.is_some()).count(),
            });
        };

        let fragments: Vec<&[String]> = records.iter().map(|record| record.message.as_slice()).collect();
        Ok(Located {
            position,
            message: merge(&fragments),
        })
    }

    /// Split mode: overwrite one station's distance and fragment
    pub async fn update(
        &self,
        name: &str,
        distance: f64,
        message: Vec<String>,
    ) -> Result<StationName, ServiceError> {
        let station = name.parse::<StationName>()?;
        self.registry.replace(station, distance, message).await;

        info!(%station, distance, "station report updated");
        Ok(station)
    }

    /// Split mode: a station's own origin and fragment, no trilateration
    pub async fn query(&self, name: &str) -> Result<StationView, ServiceError> {
        let station = name.parse::<StationName>()?;
        let StationRecord { origin, message, .. } = self.registry.get(station).await;

        let text = station_view(&message);
        let complete = is_complete(&message);
        debug!(%station, complete, "station view requested");

        Ok(StationView {
            origin,
            message: text,
            complete,
        })
    }
}
