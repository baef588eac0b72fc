pub mod fares;
pub mod pricing;
pub mod seat_map;

pub use fares::{fare_bundles, fare_by_id};
pub use pricing::{PricingConfig, PricingEngine, PricingError};
pub use seat_map::{generate_seat_map, recommend_seats, SeatPreferences, SeatRecommendation};
