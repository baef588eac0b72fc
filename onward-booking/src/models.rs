use onward_core::{BookingRecord, FareBundle, Flight, Passenger, SearchParams, SelectedSeat};
use onward_shared::RequestStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Steps of the booking flow, in order
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    #[default]
    Search = 1,
    Results = 2,
    Details = 3,
    Seats = 4,
    Review = 5,
    Confirmed = 6,
}

impl BookingStep {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(BookingStep::Search),
            2 => Some(BookingStep::Results),
            3 => Some(BookingStep::Details),
            4 => Some(BookingStep::Seats),
            5 => Some(BookingStep::Review),
            6 => Some(BookingStep::Confirmed),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStep::Search => "search",
            BookingStep::Results => "results",
            BookingStep::Details => "details",
            BookingStep::Seats => "seats",
            BookingStep::Review => "review",
            BookingStep::Confirmed => "confirmed",
        };
        write!(f, "{} ({})", label, self.number())
    }
}

/// The booking aggregate. One per session; reset after a booking is
/// acknowledged or abandoned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingState {
    pub step: BookingStep,
    pub search_params: Option<SearchParams>,
    pub selected_flight: Option<Flight>,
    pub passengers: Vec<Passenger>,
    pub selected_fare_bundle: Option<FareBundle>,
    pub selected_seats: Vec<SelectedSeat>,
    pub booking_reference: Option<String>,
    pub confirmation_status: RequestStatus,
    pub confirmation_error: Option<String>,
    /// Full record from the last successful confirmation.
    pub confirmed_booking: Option<BookingRecord>,
}

impl BookingState {
    pub fn is_confirmed(&self) -> bool {
        self.confirmation_status == RequestStatus::Succeeded
    }

    pub fn is_seat_selected(&self, seat_id: &str) -> bool {
        self.selected_seats.iter().any(|s| s.id == seat_id)
    }

    /// Price of a selected seat, if selected.
    pub fn seat_price(&self, seat_id: &str) -> Option<i32> {
        self.selected_seats.iter().find(|s| s.id == seat_id).map(|s| s.price)
    }

    pub fn selected_seat_ids(&self) -> Vec<&str> {
        self.selected_seats.iter().map(|s| s.id.as_str()).collect()
    }
}
