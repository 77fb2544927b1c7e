//! Request and response bodies exchanged over HTTP

use serde::{Deserialize, Serialize};

use crate::core::{Coordinates, NOT_FOUND_MESSAGE};

/// One station's report inside a combined request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReport {
    pub name: String,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub message: Vec<String>,
}

impl StationReport {
    pub fn new(name: &str, distance: Option<f64>, message: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            distance,
            message: message.iter().map(|word| word.to_string()).collect(),
        }
    }
}

/// Body of `POST /topsecret`: either a bare list of reports or wrapped
/// in a `satellites` field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TopSecretRequest {
    Wrapped { satellites: Vec<StationReport> },
    Bare(Vec<StationReport>),
}

impl TopSecretRequest {
    pub fn into_reports(self) -> Vec<StationReport> {
        match self {
            TopSecretRequest::Wrapped { satellites } => satellites,
            TopSecretRequest::Bare(reports) => reports,
        }
    }
}

/// Body of `POST /topsecret_split/{name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitReport {
    pub distance: f64,
    #[serde(default)]
    pub message: Vec<String>,
}

/// Position and message returned on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSecretResponse {
    pub position: Coordinates,
    pub message: String,
}

/// `{"message": "RESPONSE CODE: 404"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFoundBody {
    pub message: String,
}

impl Default for NotFoundBody {
    fn default() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}
