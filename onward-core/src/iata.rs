use serde::Serialize;

// ============================================================================
// Airport and airline reference data
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub timezone: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Airline {
    pub code: &'static str,
    pub name: &'static str,
    pub rating: f32,
}

macro_rules! airport {
    ($code:expr, $name:expr, $city:expr, $country:expr, $lat:expr, $lng:expr, $tz:expr) => {
        Airport { code: $code, name: $name, city: $city, country: $country, lat: $lat, lng: $lng, timezone: $tz }
    };
}

pub const AIRPORTS: &[Airport] = &[
    airport!("JFK", "John F. Kennedy International", "New York", "USA", 40.6413, -73.7781, "America/New_York"),
    airport!("LHR", "London Heathrow", "London", "UK", 51.4700, -0.4543, "Europe/London"),
    airport!("LAX", "Los Angeles International", "Los Angeles", "USA", 33.9416, -118.4085, "America/Los_Angeles"),
    airport!("NRT", "Narita International", "Tokyo", "Japan", 35.7720, 140.3929, "Asia/Tokyo"),
    airport!("CDG", "Charles de Gaulle", "Paris", "France", 49.0097, 2.5479, "Europe/Paris"),
    airport!("DXB", "Dubai International", "Dubai", "UAE", 25.2532, 55.3657, "Asia/Dubai"),
    airport!("SIN", "Singapore Changi", "Singapore", "Singapore", 1.3644, 103.9915, "Asia/Singapore"),
    airport!("SYD", "Sydney Kingsford Smith", "Sydney", "Australia", -33.9399, 151.1753, "Australia/Sydney"),
    airport!("MIA", "Miami International", "Miami", "USA", 25.7959, -80.2870, "America/New_York"),
    airport!("ORD", "Chicago O'Hare", "Chicago", "USA", 41.9742, -87.9073, "America/Chicago"),
    airport!("SFO", "San Francisco International", "San Francisco", "USA", 37.6213, -122.3790, "America/Los_Angeles"),
    airport!("BOS", "Logan International", "Boston", "USA", 42.3656, -71.0096, "America/New_York"),
    airport!("BCN", "Barcelona-El Prat", "Barcelona", "Spain", 41.2974, 2.0833, "Europe/Madrid"),
    airport!("FCO", "Leonardo da Vinci-Fiumicino", "Rome", "Italy", 41.8003, 12.2389, "Europe/Rome"),
    airport!("HND", "Tokyo Haneda", "Tokyo", "Japan", 35.5494, 139.7798, "Asia/Tokyo"),
    airport!("ICN", "Incheon International", "Seoul", "South Korea", 37.4602, 126.4407, "Asia/Seoul"),
    airport!("AMS", "Amsterdam Schiphol", "Amsterdam", "Netherlands", 52.3105, 4.7683, "Europe/Amsterdam"),
    airport!("FRA", "Frankfurt Airport", "Frankfurt", "Germany", 50.0379, 8.5622, "Europe/Berlin"),
    airport!("HKG", "Hong Kong International", "Hong Kong", "China", 22.3080, 113.9185, "Asia/Hong_Kong"),
    airport!("IST", "Istanbul Airport", "Istanbul", "Turkey", 41.2753, 28.7519, "Europe/Istanbul"),
    airport!("DEN", "Denver International", "Denver", "USA", 39.8561, -104.6737, "America/Denver"),
    airport!("ATL", "Hartsfield-Jackson Atlanta", "Atlanta", "USA", 33.6407, -84.4277, "America/New_York"),
    airport!("LAS", "Harry Reid International", "Las Vegas", "USA", 36.0840, -115.1537, "America/Los_Angeles"),
    airport!("SEA", "Seattle-Tacoma International", "Seattle", "USA", 47.4502, -122.3088, "America/Los_Angeles"),
];

pub const AIRLINES: &[Airline] = &[
    Airline { code: "SW", name: "SkyWings", rating: 4.8 },
    Airline { code: "AA", name: "Atlantic Air", rating: 4.6 },
    Airline { code: "EC", name: "EuroConnect", rating: 4.3 },
    Airline { code: "PA", name: "Premium Airways", rating: 4.9 },
    Airline { code: "GA", name: "Global Airways", rating: 4.7 },
    Airline { code: "OA", name: "Ocean Air", rating: 4.5 },
];

/// Three uppercase ASCII letters. Does not require the code to be listed.
pub fn is_valid_airport_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

pub fn airport_by_code(code: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|a| a.code == code)
}

pub fn airline_by_code(code: &str) -> Option<&'static Airline> {
    AIRLINES.iter().find(|a| a.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_lookup() {
        let lhr = airport_by_code("LHR").unwrap();
        assert_eq!(lhr.city, "London");
        assert!(airport_by_code("XXX").is_none());
    }

    #[test]
    fn test_airline_lookup() {
        assert_eq!(airline_by_code("PA").unwrap().name, "Premium Airways");
        assert!(airline_by_code("ZZ").is_none());
    }

    #[test]
    fn test_code_format() {
        assert!(is_valid_airport_code("JFK"));
        assert!(!is_valid_airport_code("jfk"));
        assert!(!is_valid_airport_code("JF"));
        assert!(!is_valid_airport_code("J1K"));
    }
}
