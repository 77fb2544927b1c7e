//! Core types and constants for the station network

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
