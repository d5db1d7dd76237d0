use airease_catalog::Catalog;
use airease_shared::{CabinClass, Flight, FlightWithScore, SearchQuery, SortOrder};
use std::cmp::Ordering;

/// City text matches when it is contained in the city name or equals the city code.
fn city_matches(query: &str, city: &str, code: &str) -> bool {
    let query = query.trim();
    city.contains(query) || query.eq_ignore_ascii_case(code)
}

pub fn matches(flight: &Flight, origin: &str, destination: &str, cabin: CabinClass) -> bool {
    city_matches(origin, &flight.departure_city, &flight.departure_city_code)
        && city_matches(destination, &flight.arrival_city, &flight.arrival_city_code)
        && flight.cabin == cabin
}

/// Linear scan keeping catalog order. The query date is not a filter:
/// the mock inventory covers a single departure day.
pub fn search_catalog(catalog: &Catalog, query: &SearchQuery) -> Vec<FlightWithScore> {
    let cabin = CabinClass::from_label(&query.cabin);
    catalog
        .iter()
        .filter(|entry| matches(&entry.flight, &query.origin, &query.destination, cabin))
        .cloned()
        .collect()
}

/// Stable sort, so ties keep their catalog order.
pub fn sort_flights(flights: &mut [FlightWithScore], order: SortOrder) {
    match order {
        SortOrder::Score => flights.sort_by(|a, b| {
            b.score
                .overall_score
                .partial_cmp(&a.score.overall_score)
                .unwrap_or(Ordering::Equal)
        }),
        SortOrder::Price => flights.sort_by(|a, b| {
            a.flight
                .price
                .partial_cmp(&b.flight.price)
                .unwrap_or(Ordering::Equal)
        }),
        SortOrder::Duration => flights.sort_by_key(|f| f.flight.duration_minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airease_catalog::CatalogGenerator;
    use chrono::NaiveDate;

    fn query(origin: &str, destination: &str, cabin: &str) -> SearchQuery {
        SearchQuery::new(origin, destination, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), cabin)
    }

    fn catalog() -> Catalog {
        CatalogGenerator::seeded(314).generate(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap())
    }

    #[test]
    fn test_matches_city_name_code_and_cabin() {
        let catalog = catalog();
        let results = search_catalog(&catalog, &query("北京", "上海", "economy"));
        for entry in &results {
            assert_eq!(entry.flight.departure_city, "北京");
            assert_eq!(entry.flight.arrival_city, "上海");
            assert_eq!(entry.flight.cabin, CabinClass::Economy);
        }

        let expected = catalog
            .iter()
            .filter(|e| {
                e.flight.departure_city == "北京"
                    && e.flight.arrival_city == "上海"
                    && e.flight.cabin == CabinClass::Economy
            })
            .count();
        assert_eq!(results.len(), expected);

        let localized = search_catalog(&catalog, &query("北京", "上海", "经济舱"));
        assert_eq!(localized, results);
    }

    #[test]
    fn test_code_match_narrows_to_airport() {
        let catalog = catalog();
        let pvg = search_catalog(&catalog, &query("PEK", "PVG", "first"));
        assert!(pvg.iter().all(|e| e.flight.arrival_city_code == "PVG"));
        assert!(pvg.iter().all(|e| e.flight.cabin == CabinClass::First));
    }

    #[test]
    fn test_search_is_idempotent_and_order_preserving() {
        let catalog = catalog();
        let q = query("上", "北京", "business");
        let first = search_catalog(&catalog, &q);
        let second = search_catalog(&catalog, &q);
        assert_eq!(first, second);

        let positions: Vec<usize> = first
            .iter()
            .map(|r| catalog.iter().position(|c| c.flight.id == r.flight.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unknown_city_matches_nothing() {
        let results = search_catalog(&catalog(), &query("拉萨", "上海", "economy"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_sort_orders() {
        let mut flights: Vec<_> = catalog().iter().cloned().collect();

        sort_flights(&mut flights, SortOrder::Price);
        assert!(flights.windows(2).all(|w| w[0].flight.price <= w[1].flight.price));

        sort_flights(&mut flights, SortOrder::Duration);
        assert!(flights
            .windows(2)
            .all(|w| w[0].flight.duration_minutes <= w[1].flight.duration_minutes));

        sort_flights(&mut flights, SortOrder::Score);
        assert!(flights
            .windows(2)
            .all(|w| w[0].score.overall_score >= w[1].score.overall_score));
    }
}
