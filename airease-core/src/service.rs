use airease_catalog::synthesize_price_history;
use airease_shared::{FlightDetail, FlightSearchResponse, PriceHistory, SearchMeta, SearchQuery};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, info};

use crate::gate::AccessTierGate;
use crate::matcher::sort_flights;
use crate::provider::FlightProvider;
use crate::{CoreError, CoreResult};

/// Entry point for search, detail and price-history lookups
#[derive(Clone)]
pub struct FlightService {
    provider: Arc<dyn FlightProvider>,
    gate: AccessTierGate,
}

impl FlightService {
    pub fn new(provider: Arc<dyn FlightProvider>, gate: AccessTierGate) -> Self {
        Self { provider, gate }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Match, optionally re-weight and sort, then gate by caller tier.
    pub async fn search(&self, query: &SearchQuery, is_authenticated: bool) -> CoreResult<FlightSearchResponse> {
        if query.origin.trim().is_empty() || query.destination.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "origin and destination are required".to_string(),
            ));
        }

        let mut flights = self.provider.search(query).await?;

        if let Some(persona) = query.persona {
            for entry in flights.iter_mut() {
                entry.score = entry.score.reweighted(persona);
            }
        }
        if let Some(order) = query.sort {
            sort_flights(&mut flights, order);
        }

        let gated = self.gate.apply(flights, is_authenticated);
        let meta = SearchMeta::new(gated.total, gated.restricted_count, is_authenticated);

        info!(
            search_id = %meta.search_id,
            provider = self.provider.name(),
            total = meta.total,
            restricted = meta.restricted_count,
            "Search {} -> {} ({})",
            query.origin,
            query.destination,
            query.cabin
        );

        Ok(FlightSearchResponse { flights: gated.visible, meta })
    }

    /// Full detail with a freshly synthesized price history. Never gated.
    pub async fn flight_detail(&self, flight_id: &str) -> CoreResult<FlightDetail> {
        let entry = self
            .provider
            .find(flight_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(flight_id.to_string()))?;

        let history = Self::history_for(&entry.flight);
        Ok(FlightDetail::new(entry, history))
    }

    pub async fn price_history(&self, flight_id: &str) -> CoreResult<PriceHistory> {
        let entry = self
            .provider
            .find(flight_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(flight_id.to_string()))?;

        Ok(Self::history_for(&entry.flight))
    }

    fn history_for(flight: &airease_shared::Flight) -> PriceHistory {
        debug!("Synthesizing price history for {}", flight.id);
        let mut rng = StdRng::from_entropy();
        synthesize_price_history(flight, Utc::now().date_naive(), &mut rng)
    }
}
