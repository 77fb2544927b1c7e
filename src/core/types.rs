//! Core data types for the station network

use std::fmt;
use std::str::FromStr;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use super::constants::{KENOBI_ORIGIN, SATO_ORIGIN, SKYWALKER_ORIGIN};

/// Errors raised while interpreting core identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Name outside the fixed set of three stations
    #[error("Satellite {0} not found.")]
    UnknownStation(String),
}

/// Identity of one of the three reference stations.
///
/// Declaration order is the solver order: Kenobi is station A,
/// Skywalker station B and Sato station C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StationName {
    Kenobi,
    Skywalker,
    Sato,
}

impl StationName {
    /// All stations in solver order
    pub const ALL: [StationName; 3] = [StationName::Kenobi, StationName::Skywalker, StationName::Sato];

    /// Lower-case name used for storage, lookup and display
    pub fn as_str(&self) -> &'static str {
        match self {
            StationName::Kenobi => "kenobi",
            StationName::Skywalker => "skywalker",
            StationName::Sato => "sato",
        }
    }

    /// Compiled-in reference coordinate of this station
    pub fn default_origin(&self) -> Point2<f64> {
        let (x, y) = match self {
            StationName::Kenobi => KENOBI_ORIGIN,
            StationName::Skywalker => SKYWALKER_ORIGIN,
            StationName::Sato => SATO_ORIGIN,
        };
        Point2::new(x, y)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StationName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        StationName::ALL
            .into_iter()
            .find(|name| name.as_str() == normalized)
            .ok_or(CoreError::UnknownStation(normalized))
    }
}

impl TryFrom<String> for StationName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StationName> for String {
    fn from(name: StationName) -> Self {
        name.as_str().to_string()
    }
}

/// One station's contribution to a fix: its fixed origin and the measured range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub origin: Point2<f64>,
    pub distance: Option<f64>,
}

impl Reading {
    pub fn new(origin: Point2<f64>, distance: Option<f64>) -> Self {
        Self { origin, distance }
    }
}

/// Outcome of a trilateration.
///
/// Both coordinates are either present together or absent together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    Resolved(Point2<f64>),
    Unresolved,
}

impl Position {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Position::Resolved(_))
    }

    pub fn point(&self) -> Option<Point2<f64>> {
        match self {
            Position::Resolved(point) => Some(*point),
            Position::Unresolved => None,
        }
    }

    /// Wire form of the resolved point
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.point().map(Coordinates::from)
    }
}

/// Plain `{x, y}` pair as exchanged over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl From<Point2<f64>> for Coordinates {
    fn from(point: Point2<f64>) -> Self {
        Self { x: point.x, y: point.y }
    }
}
