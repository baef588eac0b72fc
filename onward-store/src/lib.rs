pub mod app_config;
pub mod booking_repo;
pub mod flight_repo;
pub mod mock_data;
pub mod seat_map_repo;

pub use app_config::{BusinessRules, Config, SimulationConfig};
pub use booking_repo::MockBookingClient;
pub use flight_repo::MockFlightSearch;
pub use seat_map_repo::MockSeatMapClient;
