//! Transmitter locator
//!
//! Locates a transmitter in the plane from the distances reported by three
//! fixed stations, and rebuilds the message each of them heard only in part.

pub mod core;
pub mod algorithms;
pub mod registry;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use core::{Coordinates, CoreError, Position, Reading, StationName};
pub use algorithms::{merge, solve, station_view, MergedMessage};
pub use registry::{StationRecord, StationRegistry};
pub use utils::{ConfigError, ServiceConfig};
pub use api::{build_router, start_server, TopSecretService};
