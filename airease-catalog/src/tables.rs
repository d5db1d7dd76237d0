//! Fixed reference data for the generated catalog.

pub struct Route {
    pub from_city: &'static str,
    pub from_code: &'static str,
    pub from_airport: &'static str,
    pub to_city: &'static str,
    pub to_code: &'static str,
    pub to_airport: &'static str,
}

const fn route(
    from_city: &'static str,
    from_code: &'static str,
    from_airport: &'static str,
    to_city: &'static str,
    to_code: &'static str,
    to_airport: &'static str,
) -> Route {
    Route { from_city, from_code, from_airport, to_city, to_code, to_airport }
}

pub static ROUTES: [Route; 8] = [
    route("北京", "PEK", "首都国际机场", "上海", "SHA", "虹桥国际机场"),
    route("北京", "PEK", "首都国际机场", "上海", "PVG", "浦东国际机场"),
    route("上海", "SHA", "虹桥国际机场", "北京", "PEK", "首都国际机场"),
    route("广州", "CAN", "白云国际机场", "北京", "PEK", "首都国际机场"),
    route("深圳", "SZX", "宝安国际机场", "上海", "SHA", "虹桥国际机场"),
    route("成都", "TFU", "天府国际机场", "北京", "PEK", "首都国际机场"),
    route("杭州", "HGH", "萧山国际机场", "北京", "PEK", "首都国际机场"),
    route("武汉", "WUH", "天河国际机场", "上海", "SHA", "虹桥国际机场"),
];

/// (IATA carrier code, display name)
pub static AIRLINES: [(&str, &str); 8] = [
    ("CA", "中国国航"),
    ("MU", "东方航空"),
    ("CZ", "南方航空"),
    ("HU", "海南航空"),
    ("3U", "四川航空"),
    ("ZH", "深圳航空"),
    ("FM", "上海航空"),
    ("MF", "厦门航空"),
];

pub static AIRCRAFT: [&str; 7] = [
    "Boeing 787-9",
    "Boeing 737-800",
    "Boeing 777-300",
    "Airbus A320",
    "Airbus A330",
    "Airbus A350",
    "Airbus A321",
];

/// City used for the single stopover of generated one-stop flights
pub const STOPOVER_CITY: &str = "武汉";

pub fn airline_name(code: &str) -> Option<&'static str> {
    AIRLINES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}
