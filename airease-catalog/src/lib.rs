pub mod catalog;
pub mod facilities;
pub mod generator;
pub mod price_history;
pub mod scoring;
pub mod tables;

pub use catalog::Catalog;
pub use facilities::{baseline_facilities, synthesize_facilities};
pub use generator::CatalogGenerator;
pub use price_history::synthesize_price_history;
pub use scoring::{score_baseline, score_synthetic};
