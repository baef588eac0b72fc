use crate::models::{BookingState, BookingStep};
use serde::Serialize;
use std::fmt;

/// Where to send the user when a step's prerequisites are missing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Redirect {
    pub to: BookingStep,
    pub reason: &'static str,
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, back to {}", self.reason, self.to)
    }
}

fn redirect(to: BookingStep, reason: &'static str) -> Result<(), Redirect> {
    Err(Redirect { to, reason })
}

/// Checks that `state` holds what `step` needs. Falls back to search when the
/// flight itself is missing so a broken session can't loop.
pub fn check_step(state: &BookingState, step: BookingStep) -> Result<(), Redirect> {
    let has_flight = state.selected_flight.is_some();
    let has_passengers = !state.passengers.is_empty();
    let has_seats = !state.selected_seats.is_empty();

    match step {
        BookingStep::Search => Ok(()),
        BookingStep::Results if state.search_params.is_none() => {
            redirect(BookingStep::Search, "No search submitted")
        }
        BookingStep::Results => Ok(()),
        BookingStep::Details | BookingStep::Seats if !has_flight => {
            redirect(BookingStep::Search, "No flight selected")
        }
        BookingStep::Details => Ok(()),
        BookingStep::Seats if !has_passengers => redirect(BookingStep::Details, "No passengers entered"),
        BookingStep::Seats => Ok(()),
        BookingStep::Review if !(has_flight && has_passengers && has_seats) => {
            redirect(BookingStep::Search, "Booking details incomplete")
        }
        BookingStep::Review => Ok(()),
        BookingStep::Confirmed if state.booking_reference.is_none() => {
            redirect(BookingStep::Search, "No confirmed booking")
        }
        BookingStep::Confirmed => Ok(()),
    }
}
