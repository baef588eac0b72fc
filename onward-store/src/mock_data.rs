use chrono::NaiveTime;
use onward_core::Amenity::{self, Entertainment, Luxury, Meals, Wifi};
use onward_core::{Flight, FlightEndpoint, PriceTrend, StopDescriptor};

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn endpoint(airport: &str, city: &str, hour: u32, minute: u32, terminal: &str, gate: &str) -> FlightEndpoint {
    FlightEndpoint::new(airport, city, time(hour, minute)).at_terminal(terminal, gate)
}

struct Extras {
    stops: StopDescriptor,
    amenities: &'static [Amenity],
    rating: f32,
    trend: PriceTrend,
    carbon_kg: u32,
    aircraft: &'static str,
    seats: u32,
}

#[allow(clippy::too_many_arguments)]
fn flight(
    id: &str,
    airline: &str,
    code: &str,
    number: &str,
    departure: FlightEndpoint,
    arrival: FlightEndpoint,
    minutes: u32,
    price: i32,
    extras: Extras,
) -> Flight {
    let mut flight = Flight::new(id, airline, code, number, departure, arrival, minutes, price);
    flight.stops = extras.stops;
    flight.amenities = extras.amenities.iter().copied().collect();
    flight.rating = extras.rating;
    flight.price_trend = extras.trend;
    flight.carbon_emissions_kg = Some(extras.carbon_kg);
    flight.aircraft = Some(extras.aircraft.to_string());
    flight.available_seat_count = extras.seats;
    flight
}

/// The static flight inventory served by the mock search backend.
pub fn flights() -> Vec<Flight> {
    vec![
        flight(
            "1", "SkyWings", "SW", "SW 4521",
            endpoint("JFK", "New York", 8, 30, "4", "B24"),
            endpoint("LHR", "London", 20, 45, "5", "A12"),
            435, 459,
            Extras { stops: StopDescriptor::NonStop, amenities: &[Wifi, Meals, Entertainment], rating: 4.8, trend: PriceTrend::Down, carbon_kg: 820, aircraft: "Boeing 787-9", seats: 45 },
        ),
        flight(
            "2", "Atlantic Air", "AA", "AA 1832",
            endpoint("JFK", "New York", 11, 0, "4", "C15"),
            endpoint("LHR", "London", 23, 30, "3", "B8"),
            450, 389,
            Extras { stops: StopDescriptor::NonStop, amenities: &[Wifi, Meals], rating: 4.6, trend: PriceTrend::Down, carbon_kg: 850, aircraft: "Airbus A350", seats: 72 },
        ),
        flight(
            "3", "EuroConnect", "EC", "EC 7291",
            endpoint("JFK", "New York", 14, 15, "1", "D9"),
            endpoint("LHR", "London", 3, 0, "2", "C5"),
            525, 329,
            Extras { stops: StopDescriptor::via(&["DUB"]), amenities: &[Meals], rating: 4.3, trend: PriceTrend::Up, carbon_kg: 950, aircraft: "Boeing 737-800", seats: 28 },
        ),
        flight(
            "4", "Premium Airways", "PA", "PA 6543",
            endpoint("JFK", "New York", 18, 0, "8", "A1"),
            endpoint("LHR", "London", 6, 15, "5", "A20"),
            435, 589,
            Extras { stops: StopDescriptor::NonStop, amenities: &[Wifi, Meals, Entertainment, Luxury], rating: 4.9, trend: PriceTrend::Stable, carbon_kg: 780, aircraft: "Boeing 787-10", seats: 18 },
        ),
        flight(
            "5", "Global Airways", "GA", "GA 2341",
            endpoint("LAX", "Los Angeles", 10, 30, "B", "G12"),
            endpoint("NRT", "Tokyo", 15, 45, "1", "S8"),
            675, 689,
            Extras { stops: StopDescriptor::NonStop, amenities: &[Wifi, Meals, Entertainment], rating: 4.7, trend: PriceTrend::Stable, carbon_kg: 1250, aircraft: "Boeing 777-300ER", seats: 56 },
        ),
        flight(
            "6", "Ocean Air", "OA", "OA 8721",
            endpoint("MIA", "Miami", 19, 45, "N", "D7"),
            endpoint("CDG", "Paris", 10, 30, "2E", "K24"),
            525, 529,
            Extras { stops: StopDescriptor::NonStop, amenities: &[Wifi, Meals, Entertainment], rating: 4.5, trend: PriceTrend::Down, carbon_kg: 920, aircraft: "Airbus A330-300", seats: 63 },
        ),
        flight(
            "7", "SkyWings", "SW", "SW 9923",
            endpoint("SFO", "San Francisco", 23, 15, "I", "A9"),
            endpoint("SIN", "Singapore", 7, 30, "3", "B15"),
            975, 799,
            Extras { stops: StopDescriptor::NonStop, amenities: &[Wifi, Meals, Entertainment, Luxury], rating: 4.8, trend: PriceTrend::Stable, carbon_kg: 1580, aircraft: "Airbus A350-900", seats: 42 },
        ),
        flight(
            "8", "Premium Airways", "PA", "PA 1156",
            endpoint("ORD", "Chicago", 9, 20, "5", "M14"),
            endpoint("DXB", "Dubai", 6, 45, "3", "A22"),
            805, 649,
            Extras { stops: StopDescriptor::NonStop, amenities: &[Wifi, Meals, Entertainment, Luxury], rating: 4.9, trend: PriceTrend::Up, carbon_kg: 1420, aircraft: "Boeing 777-200LR", seats: 31 },
        ),
        flight(
            "9", "Atlantic Air", "AA", "AA 4487",
            endpoint("BOS", "Boston", 17, 30, "E", "E10"),
            endpoint("BCN", "Barcelona", 6, 15, "1", "B42"),
            465, 479,
            Extras { stops: StopDescriptor::NonStop, amenities: &[Wifi, Meals, Entertainment], rating: 4.6, trend: PriceTrend::Down, carbon_kg: 880, aircraft: "Airbus A330-200", seats: 51 },
        ),
    ]
}

/// Flights from `from` to `to` in the static inventory.
pub fn flights_between(from: &str, to: &str) -> Vec<Flight> {
    flights().into_iter().filter(|f| f.serves_route(from, to)).collect()
}
