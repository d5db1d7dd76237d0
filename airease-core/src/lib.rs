pub mod gate;
pub mod matcher;
pub mod provider;
pub mod service;

pub use gate::{AccessTierGate, GatedResults, DEFAULT_VISIBILITY_LIMIT};
pub use matcher::{matches, search_catalog, sort_flights};
pub use provider::{FlightProvider, MockProvider};
pub use service::FlightService;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Flight not found: {0}")]
    NotFound(String),
    #[error("Upstream provider failed: {0}")]
    Upstream(String),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
