use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Cabin tiers offered across all providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    #[serde(alias = "经济舱")]
    Economy,
    #[serde(alias = "公务舱")]
    Business,
    #[serde(alias = "头等舱")]
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 3] = [CabinClass::Economy, CabinClass::Business, CabinClass::First];

    /// Resolve a caller-supplied cabin label, English or localized.
    /// Unknown labels fall back to economy.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "business" | "公务舱" => CabinClass::Business,
            "first" | "头等舱" => CabinClass::First,
            _ => CabinClass::Economy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }

    pub fn localized_label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "经济舱",
            CabinClass::Business => "公务舱",
            CabinClass::First => "头等舱",
        }
    }

    pub fn is_premium(&self) -> bool {
        !matches!(self, CabinClass::Economy)
    }
}

impl std::fmt::Display for CabinClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single bookable flight offer. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub flight_number: String,
    pub airline: String,
    pub airline_code: String,
    pub departure_city: String,
    pub departure_city_code: String,
    pub departure_airport: String,
    pub departure_airport_code: String,
    pub departure_time: NaiveDateTime,
    pub arrival_city: String,
    pub arrival_city_code: String,
    pub arrival_airport: String,
    pub arrival_airport_code: String,
    pub arrival_time: NaiveDateTime,
    pub duration_minutes: i64,
    pub stops: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_cities: Option<Vec<String>>,
    pub cabin: CabinClass,
    pub aircraft_model: Option<String>,
    pub price: f64,
    pub currency: String,
    pub seats_remaining: Option<u32>,
}

impl Flight {
    /// Checks the structural invariants every provider must uphold.
    pub fn is_consistent(&self) -> bool {
        let elapsed = (self.arrival_time - self.departure_time).num_minutes();
        self.arrival_time > self.departure_time
            && elapsed == self.duration_minutes
            && self.price > 0.0
            && (self.stops > 0) == self.stop_cities.is_some()
    }
}

/// On-board amenities. `None` means unknown, not unavailable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightFacilities {
    pub has_wifi: Option<bool>,
    pub has_power: Option<bool>,
    pub seat_pitch_inches: Option<u32>,
    pub seat_pitch_category: Option<String>,
    #[serde(rename = "hasIFE")]
    pub has_ife: Option<bool>,
    pub ife_type: Option<String>,
    pub meal_included: Option<bool>,
    pub meal_type: Option<String>,
}
