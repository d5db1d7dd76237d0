use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::info;

use crate::SupplierError;

/// Tokens are treated as expired this long before the supplier says so
pub const EXPIRY_MARGIN_SECONDS: i64 = 60;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub expires_in: i64,
}

/// Performs the client-credentials exchange
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn exchange(&self) -> Result<TokenGrant, SupplierError>;
}

#[derive(Debug)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Bearer token cache. The lock is held across a refresh so concurrent
/// callers wait for one exchange instead of each starting their own.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, source: &dyn TokenSource) -> Result<String, SupplierError> {
        self.get_at(source, Utc::now()).await
    }

    pub async fn get_at(&self, source: &dyn TokenSource, now: DateTime<Utc>) -> Result<String, SupplierError> {
        let mut slot = self.slot.lock().await;
        if let Some(token) = slot.as_ref() {
            if now < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        let grant = source.exchange().await?;
        let expires_at = now + Duration::seconds(grant.expires_in - EXPIRY_MARGIN_SECONDS);
        info!("Refreshed supplier access token, valid until {}", expires_at);

        *slot = Some(CachedToken {
            value: grant.access_token.clone(),
            expires_at,
        });
        Ok(grant.access_token)
    }
}
