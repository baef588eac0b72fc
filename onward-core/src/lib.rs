pub mod booking;
pub mod fare;
pub mod flight;
pub mod iata;
pub mod passenger;
pub mod repository;
pub mod search;
pub mod seat;

pub use booking::{
    BookingConfirmation, BookingHistoryEntry, BookingRecord, BookingRequest, BookingStatus,
    CancellationReceipt, ContactInfo, PriceBreakdown, RoutePoint, UserBookings,
};
pub use fare::{FareBundle, FareFeature};
pub use flight::{Amenity, Flight, FlightEndpoint, PriceTrend, StopDescriptor};
pub use iata::{Airline, Airport};
pub use passenger::{Passenger, PassengerPatch};
pub use search::{FlightResult, PriceRange, SearchParams, SortKey, StopsFilter};
pub use repository::{BookingClient, ClientError, FlightSearchClient, SeatMapClient};
pub use seat::{Seat, SeatMap, SeatMapMetadata, SeatPosition, SeatStatus, SeatType, SelectedSeat};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
