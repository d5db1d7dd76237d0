use airease_shared::{Flight, PriceHistory, PricePoint, PriceTrend};
use chrono::{Duration, NaiveDate};
use rand::Rng;

pub const HISTORY_DAYS: i64 = 7;
/// Lowest fraction of the current price a historical point may reach
pub const PRICE_FLOOR_RATIO: f64 = 0.7;

/// Generates one point per day for the seven days before `today`, oldest first.
/// The trend is picked once and drives every point.
pub fn synthesize_price_history<R: Rng + ?Sized>(
    flight: &Flight,
    today: NaiveDate,
    rng: &mut R,
) -> PriceHistory {
    let trend = match rng.gen_range(0..3) {
        0 => PriceTrend::Rising,
        1 => PriceTrend::Falling,
        _ => PriceTrend::Stable,
    };
    let daily_step = rng.gen_range(15.0..=25.0);
    let floor = (flight.price * PRICE_FLOOR_RATIO).ceil();

    let points = (1..=HISTORY_DAYS)
        .rev()
        .map(|days_back| {
            let steps = (HISTORY_DAYS - days_back) as f64;
            let offset = match trend {
                PriceTrend::Rising => steps * daily_step,
                PriceTrend::Falling => -steps * daily_step,
                PriceTrend::Stable => rng.gen_range(-30.0..=30.0),
            };
            PricePoint {
                date: today - Duration::days(days_back),
                price: (flight.price + offset).round().max(floor),
            }
        })
        .collect();

    PriceHistory {
        flight_id: flight.id.clone(),
        points,
        current_price: flight.price,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tests::sample_flight;
    use airease_shared::CabinClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_seven_consecutive_days_ending_yesterday() {
        let mut rng = StdRng::seed_from_u64(1);
        let flight = sample_flight(CabinClass::Economy, 1200.0, 0);
        let history = synthesize_price_history(&flight, today(), &mut rng);

        assert_eq!(history.points.len(), 7);
        assert_eq!(history.points[0].date, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert_eq!(history.points[6].date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        for pair in history.points.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert_eq!(history.current_price, 1200.0);
        assert_eq!(history.flight_id, flight.id);
    }

    #[test]
    fn test_prices_respect_floor_and_trend() {
        let mut rng = StdRng::seed_from_u64(99);
        // Low fare so a falling series hits the floor
        let flight = sample_flight(CabinClass::Economy, 150.5, 0);
        let mut seen = Vec::new();
        for _ in 0..300 {
            let history = synthesize_price_history(&flight, today(), &mut rng);
            for point in &history.points {
                assert!(point.price >= 0.7 * flight.price);
                assert_eq!(point.price, point.price.round());
            }
            let prices: Vec<f64> = history.points.iter().map(|p| p.price).collect();
            match history.trend {
                PriceTrend::Rising => assert!(prices.windows(2).all(|w| w[0] <= w[1])),
                PriceTrend::Falling => assert!(prices.windows(2).all(|w| w[0] >= w[1])),
                PriceTrend::Stable => {}
            }
            if !seen.contains(&history.trend) {
                seen.push(history.trend);
            }
        }
        assert_eq!(seen.len(), 3);
    }
}
