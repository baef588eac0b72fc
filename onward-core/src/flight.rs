use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One end of a flight (origin or destination).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightEndpoint {
    pub airport: String,
    pub city: String,
    pub time: NaiveTime,
    /// Stamped at query time from the search parameters; static flight
    /// records carry no date.
    pub date: Option<NaiveDate>,
    pub terminal: Option<String>,
    pub gate: Option<String>,
}

impl FlightEndpoint {
    pub fn new(airport: &str, city: &str, time: NaiveTime) -> Self {
        Self {
            airport: airport.to_string(),
            city: city.to_string(),
            time,
            date: None,
            terminal: None,
            gate: None,
        }
    }

    pub fn at_terminal(mut self, terminal: &str, gate: &str) -> Self {
        self.terminal = Some(terminal.to_string());
        self.gate = Some(gate.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopDescriptor {
    NonStop,
    Connecting { stops: u8, via: Vec<String> },
}

impl StopDescriptor {
    pub fn via(airports: &[&str]) -> Self {
        if airports.is_empty() {
            return StopDescriptor::NonStop;
        }
        StopDescriptor::Connecting {
            stops: u8::try_from(airports.len()).unwrap_or(u8::MAX),
            via: airports.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn stop_count(&self) -> u8 {
        match self {
            StopDescriptor::NonStop => 0,
            StopDescriptor::Connecting { stops, .. } => *stops,
        }
    }
}

impl fmt::Display for StopDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopDescriptor::NonStop => write!(f, "Non-stop"),
            StopDescriptor::Connecting { stops, via } => {
                let noun = if *stops == 1 { "stop" } else { "stops" };
                if via.is_empty() {
                    write!(f, "{} {}", stops, noun)
                } else {
                    write!(f, "{} {} ({})", stops, noun, via.join(", "))
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Wifi,
    Meals,
    Entertainment,
    Luxury,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    #[default]
    Stable,
}

/// A scheduled flight as listed in search results. Read-only inside the
/// booking flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub airline_code: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration_minutes: u32,
    pub stops: StopDescriptor,
    /// Per-passenger fare in whole currency units.
    pub base_price: i32,
    pub amenities: BTreeSet<Amenity>,
    pub rating: f32,
    pub available_seat_count: u32,
    pub aircraft: Option<String>,
    pub carbon_emissions_kg: Option<u32>,
    pub price_trend: PriceTrend,
}

impl Flight {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        airline: &str,
        airline_code: &str,
        flight_number: &str,
        departure: FlightEndpoint,
        arrival: FlightEndpoint,
        duration_minutes: u32,
        base_price: i32,
    ) -> Self {
        Self {
            id: id.to_string(),
            airline: airline.to_string(),
            airline_code: airline_code.to_string(),
            flight_number: flight_number.to_string(),
            departure,
            arrival,
            duration_minutes,
            stops: StopDescriptor::NonStop,
            base_price,
            amenities: BTreeSet::new(),
            rating: 0.0,
            available_seat_count: 0,
            aircraft: None,
            carbon_emissions_kg: None,
            price_trend: PriceTrend::Stable,
        }
    }

    /// Fare for the whole party. Never stored on the flight itself.
    pub fn total_price(&self, passenger_count: u32) -> i32 {
        self.base_price
            .saturating_mul(i32::try_from(passenger_count).unwrap_or(i32::MAX))
    }

    pub fn formatted_duration(&self) -> String {
        format!("{}h {}m", self.duration_minutes / 60, self.duration_minutes % 60)
    }

    pub fn serves_route(&self, from: &str, to: &str) -> bool {
        self.departure.airport == from && self.arrival.airport == to
    }
}
