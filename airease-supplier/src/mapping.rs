use airease_shared::CabinClass;

const CITY_CODES: [(&str, &str); 9] = [
    ("北京", "PEK"),
    ("上海", "SHA"),
    ("广州", "CAN"),
    ("深圳", "SZX"),
    ("成都", "CTU"),
    ("杭州", "HGH"),
    ("武汉", "WUH"),
    ("西安", "XIY"),
    ("南京", "NKG"),
];

/// Maps a known city name to its IATA code; anything else is assumed to be a code already.
pub fn city_code(city: &str) -> String {
    let city = city.trim();
    CITY_CODES
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| city.to_ascii_uppercase())
}

pub fn travel_class(cabin: CabinClass) -> &'static str {
    match cabin {
        CabinClass::Economy => "ECONOMY",
        CabinClass::Business => "BUSINESS",
        CabinClass::First => "FIRST",
    }
}
