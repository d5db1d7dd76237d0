pub mod client;
pub mod mapping;
pub mod memo;
pub mod provider;
pub mod token;
pub mod transform;

pub use client::{AmadeusClient, AmadeusConfig};
pub use provider::AmadeusProvider;
pub use token::{TokenCache, TokenGrant, TokenSource};

use airease_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token exchange failed (status {status}): {body}")]
    Auth { status: u16, body: String },

    #[error("Offer transform failed: {0}")]
    Transform(String),
}

impl From<SupplierError> for CoreError {
    fn from(err: SupplierError) -> Self {
        CoreError::Upstream(err.to_string())
    }
}
