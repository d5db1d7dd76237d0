pub mod flight;
pub mod price;
pub mod score;
pub mod search;
