use airease_catalog::tables::airline_name;
use airease_catalog::{baseline_facilities, score_baseline};
use airease_shared::{CabinClass, Flight, FlightWithScore};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::SupplierError;

pub const ID_PREFIX: &str = "amadeus-";
const DEFAULT_CURRENCY: &str = "CNY";

// ============================================================================
// Supplier payload (only the fields we read)
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOffer {
    id: String,
    itineraries: Vec<RawItinerary>,
    price: RawPrice,
    number_of_bookable_seats: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawItinerary {
    segments: Vec<RawSegment>,
}

#[derive(Debug, Deserialize)]
struct RawPrice {
    total: String,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSegment {
    departure: RawEndpoint,
    arrival: RawEndpoint,
    carrier_code: String,
    number: String,
    aircraft: Option<RawAircraft>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEndpoint {
    iata_code: String,
    at: String,
}

#[derive(Debug, Deserialize)]
struct RawAircraft {
    code: Option<String>,
}

/// What the caller asked for; supplier offers do not carry city names or cabin labels.
///
/// Offer ids restart at "1" in every response, so `search_tag` scopes them to one search.
#[derive(Debug, Clone)]
pub struct TransformContext {
    pub origin: String,
    pub destination: String,
    pub cabin: CabinClass,
    pub search_tag: String,
}

impl TransformContext {
    /// Context for a fresh search with its own random tag
    pub fn new(origin: &str, destination: &str, cabin: CabinClass) -> Self {
        let tag = Uuid::new_v4().simple().to_string();
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            cabin,
            search_tag: tag[..8].to_string(),
        }
    }

    pub fn flight_id(&self, offer_id: &str) -> String {
        format!("{}{}-{}", ID_PREFIX, self.search_tag, offer_id)
    }
}

/// A supplier timestamp, with its UTC offset when one was given
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestamp {
    pub local: NaiveDateTime,
    pub offset: Option<FixedOffset>,
}

impl Timestamp {
    /// Minutes from `self` to `later`. Offsets are honoured only when both ends carry one.
    pub fn minutes_until(&self, later: &Timestamp) -> i64 {
        match (self.offset, later.offset) {
            (Some(from), Some(to)) => {
                let start = self.local.and_local_timezone(from).single();
                let end = later.local.and_local_timezone(to).single();
                match (start, end) {
                    (Some(start), Some(end)) => (end - start).num_minutes(),
                    _ => (later.local - self.local).num_minutes(),
                }
            }
            _ => (later.local - self.local).num_minutes(),
        }
    }
}

/// Converts every offer under `data`, skipping the ones that fail.
pub fn transform_offers(payload: &Value, ctx: &TransformContext) -> Vec<FlightWithScore> {
    let Some(offers) = payload.get("data").and_then(Value::as_array) else {
        return Vec::new();
    };

    offers
        .iter()
        .filter_map(|offer| match transform_offer(offer, ctx) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping supplier offer: {}", e);
                None
            }
        })
        .collect()
}

pub fn transform_offer(offer: &Value, ctx: &TransformContext) -> Result<FlightWithScore, SupplierError> {
    let raw = RawOffer::deserialize(offer).map_err(|e| SupplierError::Transform(e.to_string()))?;

    let segments = &raw
        .itineraries
        .first()
        .ok_or_else(|| SupplierError::Transform(format!("offer {} has no itinerary", raw.id)))?
        .segments;
    let (first, last) = match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(SupplierError::Transform(format!("offer {} has no segments", raw.id))),
    };

    let price: f64 = raw
        .price
        .total
        .parse()
        .map_err(|_| SupplierError::Transform(format!("bad price '{}'", raw.price.total)))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(SupplierError::Transform(format!("non-positive price {}", price)));
    }

    let departure = parse_timestamp(&first.departure.at)?;
    let arrival = parse_timestamp(&last.arrival.at)?;
    let duration_minutes = departure.minutes_until(&arrival);
    if duration_minutes <= 0 {
        return Err(SupplierError::Transform(format!(
            "offer {} arrives before it departs",
            raw.id
        )));
    }

    let stops = (segments.len() - 1) as u32;
    let stop_cities = (stops > 0).then(|| {
        segments[..segments.len() - 1]
            .iter()
            .map(|s| s.arrival.iata_code.clone())
            .collect()
    });

    let flight = Flight {
        id: ctx.flight_id(&raw.id),
        flight_number: format!("{}{}", first.carrier_code, first.number),
        airline: airline_name(&first.carrier_code)
            .map(str::to_string)
            .unwrap_or_else(|| first.carrier_code.clone()),
        airline_code: first.carrier_code.clone(),
        departure_city: ctx.origin.clone(),
        departure_city_code: first.departure.iata_code.clone(),
        departure_airport: first.departure.iata_code.clone(),
        departure_airport_code: first.departure.iata_code.clone(),
        departure_time: departure.local,
        arrival_city: ctx.destination.clone(),
        arrival_city_code: last.arrival.iata_code.clone(),
        arrival_airport: last.arrival.iata_code.clone(),
        arrival_airport_code: last.arrival.iata_code.clone(),
        arrival_time: arrival.local,
        duration_minutes,
        stops,
        stop_cities,
        cabin: ctx.cabin,
        aircraft_model: first.aircraft.as_ref().and_then(|a| a.code.clone()),
        price,
        currency: raw.price.currency.clone().unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        seats_remaining: raw.number_of_bookable_seats,
    };

    let score = score_baseline(&flight);
    let facilities = baseline_facilities(flight.cabin);
    Ok(FlightWithScore { flight, score, facilities })
}

/// Accepts local timestamps (`2025-03-01T08:30:00`) and RFC 3339 with an offset.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, SupplierError> {
    if let Ok(local) = value.parse::<NaiveDateTime>() {
        return Ok(Timestamp { local, offset: None });
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| Timestamp {
            local: dt.naive_local(),
            offset: Some(*dt.offset()),
        })
        .map_err(|e| SupplierError::Transform(format!("bad timestamp '{}': {}", value, e)))
}
