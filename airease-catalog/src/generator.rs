use airease_shared::{CabinClass, Flight, FlightWithScore};
use chrono::{Duration, NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::catalog::Catalog;
use crate::facilities::synthesize_facilities;
use crate::scoring::score_synthetic;
use crate::tables::{Route, AIRCRAFT, AIRLINES, ROUTES, STOPOVER_CITY};

pub const FLIGHTS_PER_ROUTE_MIN: usize = 3;
pub const FLIGHTS_PER_ROUTE_MAX: usize = 6;
pub const CURRENCY: &str = "CNY";
pub const ID_PREFIX: &str = "flight-";

/// Builds the mock catalog: every route gets 3-6 scored, equipped flights.
pub struct CatalogGenerator<R: Rng = StdRng> {
    rng: R,
}

impl CatalogGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> CatalogGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate flights departing on `departure_date`.
    pub fn generate(&mut self, departure_date: NaiveDate) -> Catalog {
        let mut flights = Vec::new();

        for route in ROUTES.iter() {
            let count = self.rng.gen_range(FLIGHTS_PER_ROUTE_MIN..=FLIGHTS_PER_ROUTE_MAX);
            for _ in 0..count {
                let id = format!("{}{}", ID_PREFIX, flights.len() + 1);
                let flight = self.generate_flight(id, route, departure_date);
                let score = score_synthetic(&flight, &mut self.rng);
                let facilities = synthesize_facilities(flight.cabin, &mut self.rng);
                flights.push(FlightWithScore { flight, score, facilities });
            }
        }

        info!("Generated mock catalog with {} flights over {} routes", flights.len(), ROUTES.len());
        Catalog::new(flights)
    }

    fn generate_flight(&mut self, id: String, route: &Route, departure_date: NaiveDate) -> Flight {
        let rng = &mut self.rng;
        let (airline_code, airline_name) = *AIRLINES.choose(rng).unwrap_or(&AIRLINES[0]);
        let flight_number = format!("{}{}", airline_code, rng.gen_range(1000..=9999));

        let hour: i64 = rng.gen_range(6..=21);
        let minute: i64 = *[0, 15, 30, 45].choose(rng).unwrap_or(&0);
        let departure_time = departure_date.and_time(NaiveTime::MIN) + Duration::minutes(hour * 60 + minute);

        let duration_minutes: i64 = rng.gen_range(120..=200);
        let arrival_time = departure_time + Duration::minutes(duration_minutes);

        let cabin = *CabinClass::ALL.choose(rng).unwrap_or(&CabinClass::Economy);
        let price = match cabin {
            CabinClass::Economy => rng.gen_range(800..=1500),
            CabinClass::Business => rng.gen_range(2500..=4500),
            CabinClass::First => rng.gen_range(5000..=8000),
        } as f64;

        let stops = if rng.gen_bool(0.85) { 0 } else { 1 };

        Flight {
            id,
            flight_number,
            airline: airline_name.to_string(),
            airline_code: airline_code.to_string(),
            departure_city: route.from_city.to_string(),
            departure_city_code: route.from_code.to_string(),
            departure_airport: route.from_airport.to_string(),
            departure_airport_code: route.from_code.to_string(),
            departure_time,
            arrival_city: route.to_city.to_string(),
            arrival_city_code: route.to_code.to_string(),
            arrival_airport: route.to_airport.to_string(),
            arrival_airport_code: route.to_code.to_string(),
            arrival_time,
            duration_minutes,
            stops,
            stop_cities: (stops > 0).then(|| vec![STOPOVER_CITY.to_string()]),
            cabin,
            aircraft_model: AIRCRAFT.choose(rng).map(|m| m.to_string()),
            price,
            currency: CURRENCY.to_string(),
            seats_remaining: Some(rng.gen_range(1..=50)),
        }
    }
}
