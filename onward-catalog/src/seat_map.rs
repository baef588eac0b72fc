use onward_core::{Seat, SeatMap, SeatMapMetadata, SeatPosition, SeatStatus, SeatType};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ROWS: u8 = 25;
pub const COLUMNS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];
pub const AISLE_AFTER: char = 'C';
pub const PREMIUM_PRICE: i32 = 45;
pub const ECONOMY_PRICE: i32 = 25;

const PREMIUM_ROWS: [u8; 2] = [12, 13];
const PREMIUM_FRONT_ROWS: u8 = 5;

/// 32-bit string hash: `h = h * 31 + c` over UTF-16 code units with
/// wrapping arithmetic, then the absolute value.
pub fn seat_hash(input: &str) -> u32 {
    let hash = input
        .encode_utf16()
        .fold(0i32, |h, c| h.wrapping_shl(5).wrapping_sub(h).wrapping_add(c as i32));
    hash.unsigned_abs()
}

fn seat_type_for_row(row: u8) -> SeatType {
    if row <= PREMIUM_FRONT_ROWS || PREMIUM_ROWS.contains(&row) {
        SeatType::Premium
    } else {
        SeatType::Economy
    }
}

/// Premium seats fill less often; economy fills more toward the rear.
fn is_occupied(seat_type: SeatType, row: u8, seed: u32) -> bool {
    let threshold = match seat_type {
        SeatType::Premium => 0.9,
        SeatType::Economy => 0.6 - f64::from(row) / 50.0,
    };
    f64::from(seed % 100) / 100.0 > threshold
}

/// Builds the seat grid for a flight. Same `flight_id` in, same grid out.
pub fn generate_seat_map(flight_id: &str) -> SeatMap {
    let mut layout = Vec::with_capacity(ROWS as usize * COLUMNS.len());
    let mut metadata = SeatMapMetadata {
        total_seats: 0,
        available_seats: 0,
        premium_seats: 0,
        economy_seats: 0,
        occupied_seats: 0,
        rows: ROWS,
        columns: COLUMNS.len() as u8,
        aisle_after_column: AISLE_AFTER,
    };

    for row in 1..=ROWS {
        let seat_type = seat_type_for_row(row);
        for (index, column) in COLUMNS.iter().enumerate() {
            let id = format!("{}{}", row, column);
            let occupied = is_occupied(seat_type, row, seat_hash(&format!("{}{}", id, flight_id)));

            let (status, base_price) = match (occupied, seat_type) {
                (true, _) => (SeatStatus::Occupied, 0),
                (false, SeatType::Premium) => (SeatStatus::Premium, PREMIUM_PRICE),
                (false, SeatType::Economy) => (SeatStatus::Available, ECONOMY_PRICE),
            };

            metadata.total_seats += 1;
            match status {
                SeatStatus::Occupied => metadata.occupied_seats += 1,
                SeatStatus::Premium => {
                    metadata.available_seats += 1;
                    metadata.premium_seats += 1;
                }
                _ => {
                    metadata.available_seats += 1;
                    metadata.economy_seats += 1;
                }
            }

            let features = match seat_type {
                SeatType::Premium => vec!["Extra legroom".to_string(), "Priority boarding".to_string()],
                SeatType::Economy => vec!["Standard seat".to_string()],
            };

            layout.push(Seat {
                id,
                row,
                column: *column,
                status,
                seat_type,
                base_price,
                position: if index < 3 { SeatPosition::Left } else { SeatPosition::Right },
                features,
            });
        }
    }

    debug!(
        flight_id = %flight_id,
        available = metadata.available_seats,
        occupied = metadata.occupied_seats,
        "Generated seat map"
    );

    SeatMap {
        flight_id: flight_id.to_string(),
        layout,
        metadata,
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatPreferences {
    #[serde(default)]
    pub window: bool,
    #[serde(default)]
    pub aisle: bool,
    #[serde(default)]
    pub front: bool,
    #[serde(default)]
    pub legroom: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatRecommendation {
    pub flight_id: String,
    pub recommendations: Vec<String>,
    pub reason: String,
}

const MAX_RECOMMENDATIONS: usize = 6;

/// Suggested seat ids for the given preferences, strongest preference first.
/// Legroom beats front-of-cabin, which beats a plain window/aisle choice.
pub fn recommend_seats(flight_id: &str, prefs: SeatPreferences) -> SeatRecommendation {
    let (seats, reason): (&[&str], &str) = if prefs.legroom {
        (&["12A", "12F", "13C", "13D"], "Exit row seats with extra legroom")
    } else if prefs.front && prefs.window {
        (&["3A", "3F", "4A", "4F"], "Window seats near the front")
    } else if prefs.front && prefs.aisle {
        (&["3C", "3D", "4C", "4D"], "Aisle seats near the front")
    } else if prefs.window {
        (&["10A", "10F", "15A", "15F"], "Window seats with potential views")
    } else if prefs.aisle {
        (&["15C", "15D", "16C", "16D"], "Aisle seats for easy access")
    } else {
        (&["18C", "18D", "19C", "19D"], "Popular choices")
    };

    let mut recommendations: Vec<String> = Vec::with_capacity(seats.len());
    for seat in seats {
        if !recommendations.iter().any(|s| s == seat) {
            recommendations.push(seat.to_string());
        }
    }
    recommendations.truncate(MAX_RECOMMENDATIONS);

    SeatRecommendation {
        flight_id: flight_id.to_string(),
        recommendations,
        reason: reason.to_string(),
    }
}
