use airease_shared::{Flight, FlightScore, ScoreDimensions, ScoreExplanation};
use rand::Rng;

pub const HIGHLIGHT_SPACIOUS: &str = "spacious seats";
pub const HIGHLIGHT_VALUE: &str = "good value";
pub const HIGHLIGHT_NONSTOP: &str = "nonstop";
pub const HIGHLIGHT_WIFI: &str = "in-flight wifi";

const POSITIVE_THRESHOLD: f64 = 7.5;

/// Scores a generated flight. Dimensions are drawn from fixed ranges,
/// value does not look at the price.
pub fn score_synthetic<R: Rng + ?Sized>(flight: &Flight, rng: &mut R) -> FlightScore {
    let dimensions = ScoreDimensions::new(
        rng.gen_range(7.5..=9.5),
        rng.gen_range(6.0..=9.0),
        rng.gen_range(6.5..=9.0),
        rng.gen_range(6.0..=9.5),
    );

    let mut highlights = highlights_for(flight, &dimensions);
    if rng.gen_bool(0.5) {
        highlights.push(HIGHLIGHT_WIFI.to_string());
    }

    let seat_pitch = rng.gen_range(30..=36);
    let explanations = explain(flight, &dimensions, seat_pitch);
    FlightScore::new(dimensions, highlights, explanations)
}

/// Scores an externally sourced flight from fixed baselines and its price.
pub fn score_baseline(flight: &Flight) -> FlightScore {
    let premium = flight.cabin.is_premium();
    let dimensions = ScoreDimensions::new(
        8.5,
        if premium { 8.5 } else { 7.5 },
        7.5,
        price_value(flight.price),
    );

    let highlights = highlights_for(flight, &dimensions);
    let seat_pitch = if premium { 42 } else { 32 };
    let explanations = explain(flight, &dimensions, seat_pitch);
    FlightScore::new(dimensions, highlights, explanations)
}

/// Every 500 currency units costs one point, bounded to [5, 9].
pub fn price_value(price: f64) -> f64 {
    (10.0 - price / 500.0).clamp(5.0, 9.0)
}

fn highlights_for(flight: &Flight, dimensions: &ScoreDimensions) -> Vec<String> {
    let mut highlights = Vec::new();
    if dimensions.comfort > 8.0 {
        highlights.push(HIGHLIGHT_SPACIOUS.to_string());
    }
    if dimensions.value > 8.0 {
        highlights.push(HIGHLIGHT_VALUE.to_string());
    }
    if flight.stops == 0 {
        highlights.push(HIGHLIGHT_NONSTOP.to_string());
    }
    highlights
}

fn explain(flight: &Flight, dimensions: &ScoreDimensions, seat_pitch: u32) -> Vec<ScoreExplanation> {
    let price_position = if dimensions.value > POSITIVE_THRESHOLD {
        "below"
    } else {
        "close to"
    };

    vec![
        ScoreExplanation {
            dimension: "safety".to_string(),
            title: "Airline safety record".to_string(),
            detail: format!("{} has a solid safety record", flight.airline),
            is_positive: true,
        },
        ScoreExplanation {
            dimension: "comfort".to_string(),
            title: "Seat space".to_string(),
            detail: format!("Seat pitch of {} inches", seat_pitch),
            is_positive: dimensions.comfort > POSITIVE_THRESHOLD,
        },
        ScoreExplanation {
            dimension: "service".to_string(),
            title: "On-board service".to_string(),
            detail: "Meals and drinks are served".to_string(),
            is_positive: true,
        },
        ScoreExplanation {
            dimension: "value".to_string(),
            title: "Price assessment".to_string(),
            detail: format!("Current price is {} the route average", price_position),
            is_positive: dimensions.value > POSITIVE_THRESHOLD,
        },
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use airease_shared::CabinClass;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub(crate) fn sample_flight(cabin: CabinClass, price: f64, stops: u32) -> Flight {
        let departure = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        Flight {
            id: "flight-test".to_string(),
            flight_number: "CA1234".to_string(),
            airline: "中国国航".to_string(),
            airline_code: "CA".to_string(),
            departure_city: "北京".to_string(),
            departure_city_code: "PEK".to_string(),
            departure_airport: "首都国际机场".to_string(),
            departure_airport_code: "PEK".to_string(),
            departure_time: departure,
            arrival_city: "上海".to_string(),
            arrival_city_code: "SHA".to_string(),
            arrival_airport: "虹桥国际机场".to_string(),
            arrival_airport_code: "SHA".to_string(),
            arrival_time: departure + chrono::Duration::minutes(135),
            duration_minutes: 135,
            stops,
            stop_cities: (stops > 0).then(|| vec!["武汉".to_string()]),
            cabin,
            aircraft_model: Some("Airbus A320".to_string()),
            price,
            currency: "CNY".to_string(),
            seats_remaining: Some(9),
        }
    }

    fn recomputed(d: &ScoreDimensions) -> f64 {
        ((d.safety * 0.25 + d.comfort * 0.30 + d.service * 0.20 + d.value * 0.25) * 10.0).round() / 10.0
    }

    #[test]
    fn test_synthetic_scores_stay_in_range_and_recompute() {
        let mut rng = StdRng::seed_from_u64(42);
        let flight = sample_flight(CabinClass::Economy, 1000.0, 0);
        for _ in 0..500 {
            let score = score_synthetic(&flight, &mut rng);
            let d = score.dimensions;
            assert!((7.5..=9.5).contains(&d.safety));
            assert!((6.0..=9.0).contains(&d.comfort));
            assert!((6.5..=9.0).contains(&d.service));
            assert!((6.0..=9.5).contains(&d.value));
            assert_eq!(score.overall_score, recomputed(&d));
            assert!(score.highlights.len() <= 3);
            assert_eq!(score.explanations.len(), 4);
        }
    }

    #[test]
    fn test_one_stop_flight_never_nonstop() {
        let mut rng = StdRng::seed_from_u64(3);
        let flight = sample_flight(CabinClass::Economy, 1000.0, 1);
        for _ in 0..100 {
            let score = score_synthetic(&flight, &mut rng);
            assert!(!score.highlights.iter().any(|h| h == HIGHLIGHT_NONSTOP));
        }
    }

    #[test]
    fn test_baseline_value_tracks_price() {
        assert_eq!(price_value(250.0), 9.0);
        assert_eq!(price_value(1500.0), 7.0);
        assert_eq!(price_value(9000.0), 5.0);

        let cheap = score_baseline(&sample_flight(CabinClass::Economy, 800.0, 0));
        assert_eq!(cheap.dimensions.safety, 8.5);
        assert_eq!(cheap.dimensions.comfort, 7.5);
        assert_eq!(cheap.dimensions.service, 7.5);
        assert_eq!(cheap.dimensions.value, 8.4);
        assert_eq!(cheap.overall_score, recomputed(&cheap.dimensions));
        assert_eq!(cheap.highlights, vec![HIGHLIGHT_VALUE, HIGHLIGHT_NONSTOP]);
    }

    #[test]
    fn test_baseline_premium_comfort() {
        let score = score_baseline(&sample_flight(CabinClass::Business, 4000.0, 1));
        assert_eq!(score.dimensions.comfort, 8.5);
        assert_eq!(score.dimensions.value, 5.0);
        assert_eq!(score.highlights, vec![HIGHLIGHT_SPACIOUS]);
        assert!(!score.explanations[3].is_positive);
    }
}
