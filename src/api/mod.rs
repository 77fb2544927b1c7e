//! Service and HTTP surface
//!
//! [`TopSecretService`] runs the combined and split workflows against the
//! station registry. The remaining modules expose it over HTTP with axum.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod service;
pub mod types;

pub use error::{ApiError, ServiceError};
pub use router::build_router;
pub use server::{start_server, ServerError};
pub use service::{Located, StationView, TopSecretService};
pub use types::{NotFoundBody, SplitReport, StationReport, TopSecretRequest, TopSecretResponse};
