use crate::guards::{check_step, Redirect};
use crate::models::{BookingState, BookingStep};
use crate::profile::ProfileAction;
use crate::results::ResultsAction;
use crate::seat_map::{SeatMapAction, MISSING_FLIGHT_ID};
use crate::session::BookingSession;
use crate::store::{BookingAction, BookingError};
use chrono::{NaiveDate, Utc};
use onward_catalog::{fare_by_id, PricingEngine};
use onward_core::search::search;
use onward_core::{
    BookingClient, BookingHistoryEntry, BookingRecord, BookingRequest, BookingStatus, CancellationReceipt,
    ContactInfo, CoreError, FlightSearchClient, Passenger, PriceBreakdown, SearchParams, SeatMapClient, SeatStatus,
    SeatType, SelectedSeat,
};
use onward_shared::RequestStatus;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn, Instrument};

pub const BOOKING_FAILED: &str = "Booking failed";
pub const CONFIRMATION_FAILED: &str = "Failed to confirm booking";
pub const CONFIRMATION_TIMED_OUT: &str = "Booking confirmation timed out";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Redirected: {0}")]
    Redirected(Redirect),

    #[error("Flight not found in results: {0}")]
    UnknownFlight(String),

    #[error("Fare bundle not found: {0}")]
    UnknownFare(String),

    #[error("Seat {0} is not available")]
    SeatUnavailable(String),

    #[error("Selected {seats} seats for {passengers} passengers")]
    SeatCountMismatch { seats: usize, passengers: usize },

    #[error("A booking confirmation is already in progress")]
    ConfirmationInFlight,

    #[error("Booking already confirmed; reset before booking again")]
    AlreadyConfirmed,

    #[error("No confirmed booking to acknowledge")]
    NotConfirmed,

    #[error("Cancellation failed: {0}")]
    CancellationFailed(String),

    #[error(transparent)]
    Store(#[from] BookingError),
}

impl From<CoreError> for WorkflowError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::ValidationError(msg) | CoreError::NotFound(msg) => WorkflowError::Validation(msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub confirmation_timeout: Duration,
    /// Require exactly one seat per passenger before review and confirmation.
    pub require_seat_per_passenger: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            confirmation_timeout: Duration::from_secs(30),
            require_seat_per_passenger: true,
        }
    }
}

fn message_or(message: Option<String>, fallback: &str) -> String {
    message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Drives a [`BookingSession`] through search, details, seats, review and
/// confirmation against the backend collaborators.
///
/// Collaborator failures end up in store state (`failed` plus a message) and
/// are reported as `Ok(RequestStatus::Failed)`. `Err` is reserved for requests
/// rejected before anything is dispatched.
pub struct BookingWorkflow {
    flights: Arc<dyn FlightSearchClient>,
    seat_maps: Arc<dyn SeatMapClient>,
    bookings: Arc<dyn BookingClient>,
    pricing: PricingEngine,
    config: WorkflowConfig,
}

impl BookingWorkflow {
    pub fn new(
        flights: Arc<dyn FlightSearchClient>,
        seat_maps: Arc<dyn SeatMapClient>,
        bookings: Arc<dyn BookingClient>,
        pricing: PricingEngine,
        config: WorkflowConfig,
    ) -> Self {
        Self {
            flights,
            seat_maps,
            bookings,
            pricing,
            config,
        }
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// Redirects the session when `step` can't be shown yet.
    fn guard(&self, session: &mut BookingSession, step: BookingStep) -> Result<(), WorkflowError> {
        if let Err(redirect) = check_step(session.booking.state(), step) {
            let span = session.span().clone();
            let _enter = span.enter();
            warn!(%redirect, requested = step.number(), "step prerequisites missing");
            session.booking.dispatch(BookingAction::SetStep(redirect.to))?;
            return Err(WorkflowError::Redirected(redirect));
        }
        Ok(())
    }

    /// Rejects edits while a confirmation is in flight or after it succeeded.
    fn ensure_editable(&self, state: &BookingState) -> Result<(), WorkflowError> {
        match state.confirmation_status {
            RequestStatus::Succeeded => Err(WorkflowError::AlreadyConfirmed),
            RequestStatus::Loading => Err(WorkflowError::ConfirmationInFlight),
            RequestStatus::Idle | RequestStatus::Failed => Ok(()),
        }
    }

    fn check_seat_count(&self, state: &BookingState) -> Result<(), WorkflowError> {
        let seats = state.selected_seats.len();
        let passengers = state.passengers.len();
        if self.config.require_seat_per_passenger && seats != passengers {
            return Err(WorkflowError::SeatCountMismatch { seats, passengers });
        }
        Ok(())
    }

    /// Moves to `step` if its prerequisites are present. Going back is always allowed.
    pub fn enter_step(&self, session: &mut BookingSession, step: BookingStep) -> Result<(), WorkflowError> {
        self.ensure_editable(session.booking.state())?;
        self.guard(session, step)?;
        session.booking.dispatch(BookingAction::SetStep(step))?;
        Ok(())
    }

    pub async fn submit_search(
        &self,
        session: &mut BookingSession,
        params: SearchParams,
    ) -> Result<RequestStatus, WorkflowError> {
        self.ensure_editable(session.booking.state())?;
        params.validate()?;

        let span = session.span().clone();
        async move {
            session.booking.dispatch(BookingAction::SetSearchParams(params.clone()))?;
            session.booking.dispatch(BookingAction::SetStep(BookingStep::Results))?;
            session.results.dispatch(ResultsAction::FetchStarted);

            match self.flights.search_flights(&params).await {
                Ok(flights) => {
                    let results = search(&flights, &params);
                    info!(from = %params.from, to = %params.to, count = results.len(), "flight search completed");
                    session.results.dispatch(ResultsAction::FetchSucceeded(results));
                }
                Err(e) => {
                    warn!(error = %e, "flight search failed");
                    let message = message_or(Some(e.to_string()), "Failed to fetch flights");
                    session.results.dispatch(ResultsAction::FetchFailed(message));
                }
            }
            Ok(session.results.state().status)
        }
        .instrument(span)
        .await
    }

    pub fn select_flight(&self, session: &mut BookingSession, flight_id: &str) -> Result<(), WorkflowError> {
        self.ensure_editable(session.booking.state())?;
        self.guard(session, BookingStep::Results)?;
        let flight = session
            .results
            .find(flight_id)
            .map(|r| r.flight.clone())
            .ok_or_else(|| WorkflowError::UnknownFlight(flight_id.to_string()))?;

        let same_flight = session
            .booking
            .state()
            .selected_flight
            .as_ref()
            .is_some_and(|f| f.id == flight.id);
        if !same_flight {
            session.booking.dispatch(BookingAction::ClearSeats)?;
            session.seat_map.dispatch(SeatMapAction::Clear);
        }

        session.booking.dispatch(BookingAction::SetSelectedFlight(flight))?;
        session.booking.dispatch(BookingAction::SetStep(BookingStep::Details))?;
        Ok(())
    }

    /// Replaces the passenger list and fare, then moves on to seat selection.
    pub fn submit_details(
        &self,
        session: &mut BookingSession,
        passengers: Vec<Passenger>,
        fare_id: &str,
        today: NaiveDate,
    ) -> Result<(), WorkflowError> {
        self.ensure_editable(session.booking.state())?;
        self.guard(session, BookingStep::Details)?;

        if passengers.is_empty() {
            return Err(WorkflowError::Validation("At least one passenger is required".to_string()));
        }
        if let Some(expected) = session.booking.state().search_params.as_ref().map(|p| p.passenger_count as usize) {
            if passengers.len() != expected {
                return Err(WorkflowError::Validation(format!(
                    "Expected details for {} passengers, got {}",
                    expected,
                    passengers.len()
                )));
            }
        }
        for (i, passenger) in passengers.iter().enumerate() {
            passenger.validate(today).map_err(|e| match WorkflowError::from(e) {
                WorkflowError::Validation(msg) => WorkflowError::Validation(format!("Passenger {}: {}", i + 1, msg)),
                other => other,
            })?;
        }
        let fare = fare_by_id(fare_id).ok_or_else(|| WorkflowError::UnknownFare(fare_id.to_string()))?;

        session.booking.dispatch(BookingAction::ClearPassengers)?;
        for passenger in passengers {
            session.booking.dispatch(BookingAction::AddPassenger(passenger))?;
        }
        session.booking.dispatch(BookingAction::SelectFareBundle(fare))?;
        session.booking.dispatch(BookingAction::SetStep(BookingStep::Seats))?;
        Ok(())
    }

    /// Fetches the seat map for the selected flight unless it is already loaded.
    pub async fn load_seat_map(&self, session: &mut BookingSession) -> Result<RequestStatus, WorkflowError> {
        self.ensure_editable(session.booking.state())?;
        self.guard(session, BookingStep::Seats)?;
        let flight_id = session
            .booking
            .state()
            .selected_flight
            .as_ref()
            .map(|f| f.id.clone())
            .unwrap_or_default();

        if session.seat_map.is_loaded_for(&flight_id) {
            return Ok(RequestStatus::Succeeded);
        }

        let span = session.span().clone();
        async move {
            session.seat_map.dispatch(SeatMapAction::FetchStarted(flight_id.clone()));
            if flight_id.trim().is_empty() {
                warn!("seat map requested without a flight id");
                session.seat_map.dispatch(SeatMapAction::FetchFailed(MISSING_FLIGHT_ID.to_string()));
                return Ok(RequestStatus::Failed);
            }

            match self.seat_maps.fetch_seat_map(&flight_id).await {
                Ok(map) => {
                    info!(flight_id = %flight_id, available = map.metadata.available_seats, "seat map loaded");
                    session.seat_map.dispatch(SeatMapAction::FetchSucceeded(map));
                    let selected: Vec<String> =
                        session.booking.state().selected_seats.iter().map(|s| s.id.clone()).collect();
                    for seat_id in selected {
                        session
                            .seat_map
                            .dispatch(SeatMapAction::UpdateSeatStatusLocally { seat_id, status: SeatStatus::Selected });
                    }
                }
                Err(e) => {
                    warn!(flight_id = %flight_id, error = %e, "seat map fetch failed");
                    let message = message_or(Some(e.to_string()), "Failed to fetch seat map");
                    session.seat_map.dispatch(SeatMapAction::FetchFailed(message));
                }
            }
            Ok(session.seat_map.state().status)
        }
        .instrument(span)
        .await
    }

    /// Selects or deselects a seat. Returns whether it is selected afterwards.
    pub fn toggle_seat(&self, session: &mut BookingSession, seat_id: &str) -> Result<bool, WorkflowError> {
        self.ensure_editable(session.booking.state())?;
        self.guard(session, BookingStep::Seats)?;
        let seat = session
            .seat_map
            .seat_by_id(seat_id)
            .cloned()
            .ok_or_else(|| WorkflowError::SeatUnavailable(seat_id.to_string()))?;

        let was_selected = session.booking.state().is_seat_selected(seat_id);
        if !was_selected && !seat.is_selectable() {
            return Err(WorkflowError::SeatUnavailable(seat_id.to_string()));
        }

        session.booking.dispatch(BookingAction::ToggleSeat(SelectedSeat::from(&seat)))?;
        let status = match (was_selected, seat.seat_type) {
            (false, _) => SeatStatus::Selected,
            (true, SeatType::Premium) => SeatStatus::Premium,
            (true, SeatType::Economy) => SeatStatus::Available,
        };
        session.seat_map.dispatch(SeatMapAction::UpdateSeatStatusLocally {
            seat_id: seat_id.to_string(),
            status,
        });
        Ok(!was_selected)
    }

    pub fn submit_seats(&self, session: &mut BookingSession) -> Result<(), WorkflowError> {
        self.ensure_editable(session.booking.state())?;
        self.guard(session, BookingStep::Seats)?;
        if session.booking.state().selected_seats.is_empty() {
            return Err(WorkflowError::Validation("Please select at least one seat".to_string()));
        }
        self.check_seat_count(session.booking.state())?;
        session.booking.dispatch(BookingAction::SetStep(BookingStep::Review))?;
        Ok(())
    }

    /// Totals shown on the review step. Confirmation prices with the same engine.
    pub fn review_total(&self, session: &mut BookingSession) -> Result<PriceBreakdown, WorkflowError> {
        self.guard(session, BookingStep::Review)?;
        Ok(session.booking.price_breakdown(&self.pricing))
    }

    fn build_request(state: &BookingState) -> Option<BookingRequest> {
        let flight = state.selected_flight.clone()?;
        Some(BookingRequest {
            flight,
            passengers: state.passengers.clone(),
            seats: state.selected_seats.clone(),
            fare_bundle: state.selected_fare_bundle.clone(),
            contact_info: ContactInfo::from_lead(&state.passengers),
        })
    }

    fn local_record(request: &BookingRequest, reference: &str, pricing: PriceBreakdown) -> BookingRecord {
        BookingRecord {
            id: reference.to_string(),
            booking_reference: reference.to_string(),
            status: BookingStatus::Confirmed,
            flight: request.flight.clone(),
            passengers: request.passengers.clone(),
            seats: request.seats.clone(),
            fare_bundle: request.fare_bundle.clone(),
            contact_info: request.contact_info.clone(),
            pricing,
            currency: "USD".to_string(),
            ticket_numbers: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Submits the booking. At most one confirmation runs per session; a
    /// confirmed session must be reset before it can book again.
    pub async fn confirm_booking(&self, session: &mut BookingSession) -> Result<RequestStatus, WorkflowError> {
        self.ensure_editable(session.booking.state())?;
        self.guard(session, BookingStep::Review)?;
        self.check_seat_count(session.booking.state())?;

        let request = match Self::build_request(session.booking.state()) {
            Some(request) => request,
            None => {
                self.guard(session, BookingStep::Search)?;
                return Err(WorkflowError::Validation("No flight selected".to_string()));
            }
        };
        let pricing = session.booking.price_breakdown(&self.pricing);

        let span = session.span().clone();
        async move {
            session.booking.dispatch(BookingAction::ConfirmationStarted)?;
            info!(
                flight = %request.flight.flight_number,
                passengers = request.passengers.len(),
                seats = request.seats.len(),
                total = pricing.total,
                "confirming booking"
            );

            let outcome = match timeout(self.config.confirmation_timeout, self.bookings.confirm_booking(&request)).await {
                Ok(Ok(confirmation)) if confirmation.success => {
                    let reference = confirmation
                        .booking_reference
                        .clone()
                        .or_else(|| confirmation.booking.as_ref().map(|b| b.booking_reference.clone()));
                    match reference {
                        Some(reference) => Ok((reference, confirmation.booking)),
                        None => Err(message_or(confirmation.message, BOOKING_FAILED)),
                    }
                }
                Ok(Ok(confirmation)) => Err(message_or(confirmation.message, BOOKING_FAILED)),
                Ok(Err(e)) => Err(message_or(Some(e.to_string()), CONFIRMATION_FAILED)),
                Err(_) => Err(CONFIRMATION_TIMED_OUT.to_string()),
            };

            match outcome {
                Ok((reference, booking)) => {
                    let record = booking.unwrap_or_else(|| Self::local_record(&request, &reference, pricing));
                    let entry = BookingHistoryEntry::from_record(&record);
                    session.booking.dispatch(BookingAction::ConfirmationSucceeded {
                        reference: reference.clone(),
                        booking: Some(record),
                    })?;
                    session.profile.dispatch(ProfileAction::AddBookingToHistory(entry));
                    info!(reference = %reference, "booking confirmed");
                    Ok(RequestStatus::Succeeded)
                }
                Err(message) => {
                    warn!(error = %message, "booking confirmation failed");
                    session.booking.dispatch(BookingAction::ConfirmationFailed(message))?;
                    Ok(RequestStatus::Failed)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Loads the signed-in user's trips, or the placeholder user's when signed out.
    pub async fn fetch_bookings(&self, session: &mut BookingSession) -> Result<RequestStatus, WorkflowError> {
        let user_id = session.profile.user_id().to_string();
        let span = session.span().clone();
        async move {
            session.profile.dispatch(ProfileAction::FetchStarted);
            match self.bookings.fetch_user_bookings(&user_id).await {
                Ok(bookings) => {
                    let mut entries = bookings.upcoming;
                    entries.extend(bookings.past);
                    info!(user_id = %user_id, count = entries.len(), "bookings fetched");
                    session.profile.dispatch(ProfileAction::FetchSucceeded(entries));
                }
                Err(e) => {
                    warn!(user_id = %user_id, error = %e, "bookings fetch failed");
                    let message = message_or(Some(e.to_string()), "Failed to fetch bookings");
                    session.profile.dispatch(ProfileAction::FetchFailed(message));
                }
            }
            Ok(session.profile.state().bookings_status)
        }
        .instrument(span)
        .await
    }

    pub async fn cancel_booking(
        &self,
        session: &mut BookingSession,
        booking_reference: &str,
    ) -> Result<CancellationReceipt, WorkflowError> {
        let span = session.span().clone();
        async move {
            let receipt = self.bookings.cancel_booking(booking_reference).await.map_err(|e| {
                warn!(reference = %booking_reference, error = %e, "cancellation failed");
                WorkflowError::CancellationFailed(message_or(Some(e.to_string()), "Failed to cancel booking"))
            })?;
            if !receipt.success {
                return Err(WorkflowError::CancellationFailed(receipt.message));
            }
            session
                .profile
                .dispatch(ProfileAction::MarkCancelled(booking_reference.to_string()));
            info!(reference = %booking_reference, refund = receipt.refund_amount, "booking cancelled");
            Ok(receipt)
        }
        .instrument(span)
        .await
    }

    fn reset(&self, session: &mut BookingSession) -> Result<(), WorkflowError> {
        session.booking.dispatch(BookingAction::ResetBooking)?;
        session.seat_map.dispatch(SeatMapAction::Clear);
        Ok(())
    }

    /// Closes out a confirmed booking and starts a fresh one.
    pub fn acknowledge(&self, session: &mut BookingSession) -> Result<(), WorkflowError> {
        if !session.booking.state().is_confirmed() {
            return Err(WorkflowError::NotConfirmed);
        }
        self.reset(session)
    }

    pub fn abandon(&self, session: &mut BookingSession) -> Result<(), WorkflowError> {
        session.span().in_scope(|| info!(step = session.booking.step().number(), "booking abandoned"));
        self.reset(session)
    }
}
