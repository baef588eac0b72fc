use crate::models::{BookingState, BookingStep};
use onward_catalog::PricingEngine;
use onward_core::{BookingRecord, FareBundle, Flight, Passenger, PassengerPatch, PriceBreakdown, SearchParams, SelectedSeat};
use onward_shared::RequestStatus;
use tracing::debug;

/// Every mutation the booking aggregate accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingAction {
    SetStep(BookingStep),
    SetSearchParams(SearchParams),
    SetSelectedFlight(Flight),
    AddPassenger(Passenger),
    RemovePassenger(usize),
    UpdatePassenger { index: usize, patch: PassengerPatch },
    ClearPassengers,
    SelectFareBundle(FareBundle),
    ToggleSeat(SelectedSeat),
    ClearSeats,
    SetBookingReference(String),
    ConfirmationStarted,
    ConfirmationSucceeded { reference: String, booking: Option<BookingRecord> },
    ConfirmationFailed(String),
    ResetBooking,
}

impl BookingAction {
    pub fn name(&self) -> &'static str {
        match self {
            BookingAction::SetStep(_) => "set_step",
            BookingAction::SetSearchParams(_) => "set_search_params",
            BookingAction::SetSelectedFlight(_) => "set_selected_flight",
            BookingAction::AddPassenger(_) => "add_passenger",
            BookingAction::RemovePassenger(_) => "remove_passenger",
            BookingAction::UpdatePassenger { .. } => "update_passenger",
            BookingAction::ClearPassengers => "clear_passengers",
            BookingAction::SelectFareBundle(_) => "select_fare_bundle",
            BookingAction::ToggleSeat(_) => "toggle_seat",
            BookingAction::ClearSeats => "clear_seats",
            BookingAction::SetBookingReference(_) => "set_booking_reference",
            BookingAction::ConfirmationStarted => "confirmation_started",
            BookingAction::ConfirmationSucceeded { .. } => "confirmation_succeeded",
            BookingAction::ConfirmationFailed(_) => "confirmation_failed",
            BookingAction::ResetBooking => "reset_booking",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid confirmation transition from {from} to {to}")]
    InvalidTransition { from: RequestStatus, to: RequestStatus },
}

fn check_transition(from: RequestStatus, to: RequestStatus) -> Result<(), BookingError> {
    let allowed = match to {
        RequestStatus::Loading => matches!(from, RequestStatus::Idle | RequestStatus::Failed),
        RequestStatus::Succeeded | RequestStatus::Failed => from == RequestStatus::Loading,
        RequestStatus::Idle => false,
    };
    if allowed {
        Ok(())
    } else {
        Err(BookingError::InvalidTransition { from, to })
    }
}

/// Applies `action` to `state`. On error the state is left untouched.
pub fn reduce(state: &mut BookingState, action: BookingAction) -> Result<(), BookingError> {
    match action {
        BookingAction::SetStep(step) => state.step = step,
        BookingAction::SetSearchParams(params) => state.search_params = Some(params),
        BookingAction::SetSelectedFlight(flight) => state.selected_flight = Some(flight),
        BookingAction::AddPassenger(passenger) => state.passengers.push(passenger),
        BookingAction::RemovePassenger(index) => {
            if index < state.passengers.len() {
                state.passengers.remove(index);
            }
        }
        BookingAction::UpdatePassenger { index, patch } => {
            if let Some(passenger) = state.passengers.get_mut(index) {
                patch.apply(passenger);
            }
        }
        BookingAction::ClearPassengers => state.passengers.clear(),
        BookingAction::SelectFareBundle(bundle) => state.selected_fare_bundle = Some(bundle),
        BookingAction::ToggleSeat(seat) => {
            if let Some(pos) = state.selected_seats.iter().position(|s| s.id == seat.id) {
                state.selected_seats.remove(pos);
            } else {
                state.selected_seats.push(seat);
            }
        }
        BookingAction::ClearSeats => state.selected_seats.clear(),
        BookingAction::SetBookingReference(reference) => state.booking_reference = Some(reference),
        BookingAction::ConfirmationStarted => {
            check_transition(state.confirmation_status, RequestStatus::Loading)?;
            state.confirmation_status = RequestStatus::Loading;
            state.confirmation_error = None;
        }
        BookingAction::ConfirmationSucceeded { reference, booking } => {
            check_transition(state.confirmation_status, RequestStatus::Succeeded)?;
            state.confirmation_status = RequestStatus::Succeeded;
            state.confirmation_error = None;
            state.booking_reference = Some(reference);
            state.confirmed_booking = booking;
            state.step = BookingStep::Confirmed;
        }
        BookingAction::ConfirmationFailed(message) => {
            check_transition(state.confirmation_status, RequestStatus::Failed)?;
            state.confirmation_status = RequestStatus::Failed;
            state.confirmation_error = Some(message);
        }
        BookingAction::ResetBooking => *state = BookingState::default(),
    }
    Ok(())
}

/// Single-writer container around [`BookingState`].
#[derive(Debug, Default)]
pub struct BookingStore {
    state: BookingState,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn dispatch(&mut self, action: BookingAction) -> Result<(), BookingError> {
        let name = action.name();
        match reduce(&mut self.state, action) {
            Ok(()) => {
                debug!(action = name, step = self.state.step.number(), "booking action applied");
                Ok(())
            }
            Err(e) => {
                debug!(action = name, error = %e, "booking action rejected");
                Err(e)
            }
        }
    }

    pub fn step(&self) -> BookingStep {
        self.state.step
    }

    pub fn passenger_count(&self) -> usize {
        self.state.passengers.len()
    }

    pub fn price_breakdown(&self, pricing: &PricingEngine) -> PriceBreakdown {
        pricing.compute_total(
            self.state.selected_fare_bundle.as_ref(),
            self.state.selected_flight.as_ref(),
            &self.state.selected_seats,
        )
    }
}
