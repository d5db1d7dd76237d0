use airease_shared::FlightWithScore;

pub const DEFAULT_VISIBILITY_LIMIT: usize = 3;

#[derive(Debug, Clone)]
pub struct GatedResults {
    pub visible: Vec<FlightWithScore>,
    /// Count before truncation
    pub total: usize,
    pub restricted_count: usize,
}

/// Limits how many results anonymous callers see
#[derive(Debug, Clone, Copy)]
pub struct AccessTierGate {
    limit: usize,
}

impl AccessTierGate {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Authenticated callers see everything. Anonymous callers get the first
    /// `limit` entries in the order given.
    pub fn apply(&self, mut flights: Vec<FlightWithScore>, is_authenticated: bool) -> GatedResults {
        let total = flights.len();
        if is_authenticated {
            return GatedResults { visible: flights, total, restricted_count: 0 };
        }

        flights.truncate(self.limit);
        GatedResults {
            visible: flights,
            total,
            restricted_count: total.saturating_sub(self.limit),
        }
    }
}

impl Default for AccessTierGate {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_LIMIT)
    }
}
