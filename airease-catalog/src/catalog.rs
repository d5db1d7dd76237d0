use airease_shared::FlightWithScore;

/// Immutable collection of scored flights, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    flights: Vec<FlightWithScore>,
}

impl Catalog {
    pub fn new(flights: Vec<FlightWithScore>) -> Self {
        Self { flights }
    }

    pub fn find(&self, flight_id: &str) -> Option<&FlightWithScore> {
        self.flights.iter().find(|f| f.flight.id == flight_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlightWithScore> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}
