use airease_catalog::{Catalog, CatalogGenerator};
use airease_shared::{FlightWithScore, SearchQuery};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;

use crate::matcher::search_catalog;
use crate::CoreResult;

/// Source of flight offers, either the in-process catalog or an external supplier
#[async_trait]
pub trait FlightProvider: Send + Sync {
    /// Offers matching the query, in provider order
    async fn search(&self, query: &SearchQuery) -> CoreResult<Vec<FlightWithScore>>;

    /// Look up a single flight previously exposed by this provider
    async fn find(&self, flight_id: &str) -> CoreResult<Option<FlightWithScore>>;

    fn name(&self) -> &'static str;
}

/// Serves searches from a catalog generated once at startup
pub struct MockProvider {
    catalog: Arc<Catalog>,
}

impl MockProvider {
    /// Days between today and the generated departure date
    pub const DEPARTURE_OFFSET_DAYS: i64 = 3;

    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Generate a catalog departing three days from today. `seed` makes it reproducible.
    pub fn generate(seed: Option<u64>) -> Self {
        let departure = Self::departure_date(Utc::now().date_naive());
        let catalog = match seed {
            Some(seed) => CatalogGenerator::seeded(seed).generate(departure),
            None => CatalogGenerator::from_entropy().generate(departure),
        };
        Self::new(Arc::new(catalog))
    }

    pub fn departure_date(today: NaiveDate) -> NaiveDate {
        today + Duration::days(Self::DEPARTURE_OFFSET_DAYS)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl FlightProvider for MockProvider {
    async fn search(&self, query: &SearchQuery) -> CoreResult<Vec<FlightWithScore>> {
        Ok(search_catalog(&self.catalog, query))
    }

    async fn find(&self, flight_id: &str) -> CoreResult<Option<FlightWithScore>> {
        Ok(self.catalog.find(flight_id).cloned())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
