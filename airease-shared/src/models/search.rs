use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::flight::{Flight, FlightFacilities};
use super::price::PriceHistory;
use super::score::{FlightScore, Persona};

/// Flight plus its experience score and amenities; the unit returned by search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightWithScore {
    pub flight: Flight,
    pub score: FlightScore,
    pub facilities: FlightFacilities,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetail {
    pub flight: Flight,
    pub score: FlightScore,
    pub facilities: FlightFacilities,
    pub price_history: PriceHistory,
}

impl FlightDetail {
    pub fn new(entry: FlightWithScore, price_history: PriceHistory) -> Self {
        Self {
            flight: entry.flight,
            score: entry.score,
            facilities: entry.facilities,
            price_history,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Highest overall score first
    Score,
    /// Cheapest first
    Price,
    /// Shortest first
    Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "from")]
    pub origin: String,
    #[serde(rename = "to")]
    pub destination: String,
    pub date: NaiveDate,
    #[serde(default = "default_cabin")]
    pub cabin: String,
    #[serde(default)]
    pub sort: Option<SortOrder>,
    #[serde(default)]
    pub persona: Option<Persona>,
}

fn default_cabin() -> String {
    "economy".to_string()
}

impl SearchQuery {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, date: NaiveDate, cabin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            date,
            cabin: cabin.into(),
            sort: None,
            persona: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchMeta {
    /// Match count before access gating
    pub total: usize,
    pub search_id: String,
    pub cached_at: Option<DateTime<Utc>>,
    pub restricted_count: usize,
    pub is_authenticated: bool,
}

impl SearchMeta {
    pub fn new(total: usize, restricted_count: usize, is_authenticated: bool) -> Self {
        Self {
            total,
            search_id: new_search_id(),
            cached_at: None,
            restricted_count,
            is_authenticated,
        }
    }
}

fn new_search_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("search-{}", &hex[..8])
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearchResponse {
    pub flights: Vec<FlightWithScore>,
    pub meta: SearchMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_deserialization() {
        let json = r#"{ "from": "北京", "to": "上海", "date": "2024-12-25" }"#;
        let query: SearchQuery = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(query.origin, "北京");
        assert_eq!(query.cabin, "economy");
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert!(query.sort.is_none());
    }

    #[test]
    fn test_search_meta_wire_format() {
        let meta = SearchMeta::new(5, 2, false);
        assert!(meta.search_id.starts_with("search-"));
        assert_eq!(meta.search_id.len(), "search-".len() + 8);

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["restrictedCount"], 2);
        assert_eq!(json["isAuthenticated"], false);
        assert!(json["cachedAt"].is_null());
    }
}
