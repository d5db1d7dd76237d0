use airease_shared::FlightWithScore;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// How long a supplier offer stays resolvable by id after a search
pub const OFFER_TTL_MINUTES: i64 = 15;

struct MemoEntry {
    entry: FlightWithScore,
    expires_at: DateTime<Utc>,
}

/// Recently returned supplier offers, so detail lookups can resolve their ids
#[derive(Default)]
pub struct OfferMemo {
    offers: RwLock<HashMap<String, MemoEntry>>,
}

impl OfferMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store offers and purge expired ones
    pub async fn remember(&self, entries: &[FlightWithScore], now: DateTime<Utc>) {
        let expires_at = now + Duration::minutes(OFFER_TTL_MINUTES);
        let mut offers = self.offers.write().await;
        offers.retain(|_, memo| memo.expires_at > now);
        for entry in entries {
            offers.insert(
                entry.flight.id.clone(),
                MemoEntry {
                    entry: entry.clone(),
                    expires_at,
                },
            );
        }
    }

    pub async fn get(&self, flight_id: &str, now: DateTime<Utc>) -> Option<FlightWithScore> {
        self.offers
            .read()
            .await
            .get(flight_id)
            .filter(|memo| memo.expires_at > now)
            .map(|memo| memo.entry.clone())
    }

    pub async fn len(&self) -> usize {
        self.offers.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::tests::{offer, segment};
    use crate::transform::{transform_offer, TransformContext};
    use airease_shared::CabinClass;
    use serde_json::{json, Value};

    fn transformed(id: &str, tag: &str, seg: Value, origin: &str, destination: &str) -> FlightWithScore {
        let ctx = TransformContext {
            origin: origin.to_string(),
            destination: destination.to_string(),
            cabin: CabinClass::Economy,
            search_tag: tag.to_string(),
        };
        transform_offer(&offer(id, json!([seg]), "900"), &ctx).unwrap()
    }

    fn entry(id: &str) -> FlightWithScore {
        let seg = segment("PEK", "2025-03-01T08:00:00", "SHA", "2025-03-01T10:00:00", "CA", "1501");
        transformed(id, "s1", seg, "北京", "上海")
    }

    #[tokio::test]
    async fn test_offers_expire() {
        let memo = OfferMemo::new();
        let t = Utc::now();
        memo.remember(&[entry("1")], t).await;

        assert!(memo.get("amadeus-s1-1", t + Duration::minutes(10)).await.is_some());
        assert!(memo.get("amadeus-s1-1", t + Duration::minutes(16)).await.is_none());
        assert!(memo.get("amadeus-s1-2", t).await.is_none());

        memo.remember(&[entry("2")], t + Duration::minutes(20)).await;
        assert_eq!(memo.len().await, 1);
    }

    #[tokio::test]
    async fn test_later_search_keeps_earlier_offers() {
        let memo = OfferMemo::new();
        let t = Utc::now();

        let beijing = transformed(
            "1",
            "aaaa1111",
            segment("PEK", "2025-03-01T08:00:00", "SHA", "2025-03-01T10:00:00", "CA", "1501"),
            "北京",
            "上海",
        );
        let guangzhou = transformed(
            "1",
            "bbbb2222",
            segment("CAN", "2025-03-01T09:00:00", "PEK", "2025-03-01T12:10:00", "CZ", "3101"),
            "广州",
            "北京",
        );
        assert_ne!(beijing.flight.id, guangzhou.flight.id);

        memo.remember(&[beijing.clone()], t).await;
        memo.remember(&[guangzhou.clone()], t + Duration::minutes(1)).await;

        let first = memo.get(&beijing.flight.id, t + Duration::minutes(2)).await.unwrap();
        assert_eq!(first.flight.flight_number, "CA1501");
        assert_eq!(first.flight.departure_city, "北京");

        let second = memo.get(&guangzhou.flight.id, t + Duration::minutes(2)).await.unwrap();
        assert_eq!(second.flight.flight_number, "CZ3101");
        assert_eq!(memo.len().await, 2);
    }
}
