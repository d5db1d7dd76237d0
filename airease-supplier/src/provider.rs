use airease_core::{CoreResult, FlightProvider};
use airease_shared::{FlightWithScore, SearchQuery};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::client::{AmadeusClient, AmadeusConfig};
use crate::memo::OfferMemo;
use crate::SupplierError;

/// Flight provider backed by the external offers API
pub struct AmadeusProvider {
    client: AmadeusClient,
    memo: OfferMemo,
}

impl AmadeusProvider {
    pub fn new(config: AmadeusConfig) -> Result<Self, SupplierError> {
        Ok(Self {
            client: AmadeusClient::new(config)?,
            memo: OfferMemo::new(),
        })
    }
}

#[async_trait]
impl FlightProvider for AmadeusProvider {
    async fn search(&self, query: &SearchQuery) -> CoreResult<Vec<FlightWithScore>> {
        let results = self.client.search_offers(query).await?;
        info!("Supplier returned {} offers", results.len());
        self.memo.remember(&results, Utc::now()).await;
        Ok(results)
    }

    async fn find(&self, flight_id: &str) -> CoreResult<Option<FlightWithScore>> {
        Ok(self.memo.get(flight_id, Utc::now()).await)
    }

    fn name(&self) -> &'static str {
        "amadeus"
    }
}
