use airease_shared::{CabinClass, FlightFacilities};
use rand::seq::SliceRandom;
use rand::Rng;

const PERSONAL_SCREEN: &str = "personal screen";
const PREMIUM_MEAL: &str = "premium dining";
const STANDARD_MEALS: [&str; 2] = ["full meal", "light meal"];
const PITCH_CATEGORIES: [&str; 3] = ["standard", "compact", "spacious"];

/// Randomized amenities for generated flights.
/// Premium cabins always get power and entertainment plus a wider pitch range.
pub fn synthesize_facilities<R: Rng + ?Sized>(cabin: CabinClass, rng: &mut R) -> FlightFacilities {
    let premium = cabin.is_premium();

    let has_wifi = [Some(true), Some(false), None].choose(rng).copied().flatten();
    let has_power = premium || rng.gen_bool(0.5);
    let has_ife = premium || rng.gen_bool(0.5);

    let seat_pitch = if premium {
        rng.gen_range(38..=78)
    } else {
        rng.gen_range(30..=34)
    };
    let pitch_category = if premium {
        "spacious"
    } else {
        PITCH_CATEGORIES.choose(rng).copied().unwrap_or("standard")
    };
    let meal_type = if premium {
        PREMIUM_MEAL
    } else {
        STANDARD_MEALS.choose(rng).copied().unwrap_or("full meal")
    };

    FlightFacilities {
        has_wifi,
        has_power: Some(has_power),
        seat_pitch_inches: Some(seat_pitch),
        seat_pitch_category: Some(pitch_category.to_string()),
        has_ife: Some(has_ife),
        ife_type: has_ife.then(|| PERSONAL_SCREEN.to_string()),
        meal_included: Some(true),
        meal_type: Some(meal_type.to_string()),
    }
}

/// Amenities for externally sourced flights, derived from the cabin alone.
/// Wifi stays unknown since suppliers do not report it.
pub fn baseline_facilities(cabin: CabinClass) -> FlightFacilities {
    let premium = cabin.is_premium();
    FlightFacilities {
        has_wifi: None,
        has_power: Some(premium),
        seat_pitch_inches: Some(if premium { 42 } else { 32 }),
        seat_pitch_category: Some(if premium { "spacious" } else { "standard" }.to_string()),
        has_ife: Some(premium),
        ife_type: premium.then(|| PERSONAL_SCREEN.to_string()),
        meal_included: Some(true),
        meal_type: Some(if premium { PREMIUM_MEAL } else { STANDARD_MEALS[0] }.to_string()),
    }
}
