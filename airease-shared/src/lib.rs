pub mod models;

pub use models::flight::{CabinClass, Flight, FlightFacilities};
pub use models::price::{PriceHistory, PricePoint, PriceTrend};
pub use models::score::{FlightScore, Persona, ScoreDimensions, ScoreExplanation, ScoreWeights};
pub use models::search::{
    FlightDetail, FlightSearchResponse, FlightWithScore, SearchMeta, SearchQuery, SortOrder,
};
