use airease_shared::{CabinClass, FlightWithScore, SearchQuery};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::mapping::{city_code, travel_class};
use crate::token::{TokenCache, TokenGrant, TokenSource};
use crate::transform::{transform_offers, TransformContext};
use crate::SupplierError;

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const OFFERS_PATH: &str = "/v2/shopping/flight-offers";
const MAX_OFFERS: u32 = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct AmadeusConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://test.api.amadeus.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for AmadeusConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            api_secret: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// HTTP client for the flight-offers API with a cached bearer token
pub struct AmadeusClient {
    http: Client,
    config: AmadeusConfig,
    tokens: TokenCache,
}

impl AmadeusClient {
    pub fn new(config: AmadeusConfig) -> Result<Self, SupplierError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            config,
            tokens: TokenCache::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// One search call, no pagination. A non-success response yields no offers;
    /// a failed token exchange or transport error is returned.
    pub async fn search_offers(&self, query: &SearchQuery) -> Result<Vec<FlightWithScore>, SupplierError> {
        let token = self.tokens.get(self).await?;

        let cabin = CabinClass::from_label(&query.cabin);
        let params = [
            ("originLocationCode", city_code(&query.origin)),
            ("destinationLocationCode", city_code(&query.destination)),
            ("departureDate", query.date.format("%Y-%m-%d").to_string()),
            ("adults", "1".to_string()),
            ("travelClass", travel_class(cabin).to_string()),
            ("currencyCode", "CNY".to_string()),
            ("max", MAX_OFFERS.to_string()),
        ];
        debug!("Supplier search params: {:?}", params);

        let response = self
            .http
            .get(self.url(OFFERS_PATH))
            .query(&params)
            .bearer_auth(&token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Supplier search returned {}: {}", status, body);
            return Ok(Vec::new());
        }

        let payload: Value = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Supplier search body unreadable: {}", e);
                return Ok(Vec::new());
            }
        };

        let ctx = TransformContext::new(&query.origin, &query.destination, cabin);
        Ok(transform_offers(&payload, &ctx))
    }
}

#[async_trait]
impl TokenSource for AmadeusClient {
    async fn exchange(&self) -> Result<TokenGrant, SupplierError> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.config.api_key.as_str()),
            ("client_secret", self.config.api_secret.as_str()),
        ];

        let response = self.http.post(self.url(TOKEN_PATH)).form(&form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SupplierError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<TokenGrant>().await?)
    }
}
