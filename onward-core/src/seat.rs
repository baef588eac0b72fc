use serde::{Deserialize, Serialize};

pub const MISSING_FLIGHT_ID: &str = "Flight ID is required to fetch seat map.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    /// An available premium seat.
    Premium,
    Occupied,
    /// Client-side overlay only; never produced by the generator.
    Selected,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Economy,
    Premium,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    /// Row number followed by column letter, e.g. `12A`.
    pub id: String,
    pub row: u8,
    pub column: char,
    pub status: SeatStatus,
    pub seat_type: SeatType,
    /// Zero for occupied seats.
    pub base_price: i32,
    pub position: SeatPosition,
    pub features: Vec<String>,
}

impl Seat {
    pub fn is_selectable(&self) -> bool {
        matches!(self.status, SeatStatus::Available | SeatStatus::Premium)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatMapMetadata {
    pub total_seats: u32,
    pub available_seats: u32,
    /// Available premium seats.
    pub premium_seats: u32,
    /// Available economy seats.
    pub economy_seats: u32,
    pub occupied_seats: u32,
    pub rows: u8,
    pub columns: u8,
    pub aisle_after_column: char,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatMap {
    pub flight_id: String,
    pub layout: Vec<Seat>,
    pub metadata: SeatMapMetadata,
}

impl SeatMap {
    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.layout.iter().find(|s| s.id == seat_id)
    }
}

/// The part of a seat kept in the booking once the user picks it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedSeat {
    pub id: String,
    pub price: i32,
}

impl SelectedSeat {
    pub fn new(id: &str, price: i32) -> Self {
        Self { id: id.to_string(), price }
    }
}

impl From<&Seat> for SelectedSeat {
    fn from(seat: &Seat) -> Self {
        Self {
            id: seat.id.clone(),
            price: seat.base_price,
        }
    }
}
