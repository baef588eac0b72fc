use async_trait::async_trait;

use crate::booking::{BookingConfirmation, BookingRequest, CancellationReceipt, UserBookings};
use crate::flight::Flight;
use crate::search::SearchParams;
use crate::seat::SeatMap;

pub type ClientError = Box<dyn std::error::Error + Send + Sync>;

/// Flight search backend. Results are already narrowed to the requested route.
#[async_trait]
pub trait FlightSearchClient: Send + Sync {
    async fn search_flights(&self, params: &SearchParams) -> Result<Vec<Flight>, ClientError>;
}

/// Seat map backend. Rejects an empty flight id.
#[async_trait]
pub trait SeatMapClient: Send + Sync {
    async fn fetch_seat_map(&self, flight_id: &str) -> Result<SeatMap, ClientError>;
}

/// Booking backend
#[async_trait]
pub trait BookingClient: Send + Sync {
    async fn confirm_booking(&self, request: &BookingRequest) -> Result<BookingConfirmation, ClientError>;

    async fn fetch_user_bookings(&self, user_id: &str) -> Result<UserBookings, ClientError>;

    async fn cancel_booking(&self, booking_reference: &str) -> Result<CancellationReceipt, ClientError>;
}
