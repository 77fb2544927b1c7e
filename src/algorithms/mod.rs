//! Core algorithms: position solving and message merging

pub mod trilateration;
pub mod message;

pub use trilateration::solve;
pub use message::{merge, is_complete, station_view, MergedMessage};
