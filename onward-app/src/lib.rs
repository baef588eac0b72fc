pub mod error;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use chrono::NaiveDate;
use onward_booking::{BookingSession, BookingStep, BookingWorkflow, ResultsAction};
use onward_catalog::{recommend_seats, SeatPreferences};
use onward_core::{BookingRecord, Passenger, SearchParams, SortKey};
use onward_shared::RequestStatus;
use tracing::info;

/// What a scripted run books: one route, one date, one fare.
#[derive(Debug, Clone)]
pub struct Itinerary {
    pub from: String,
    pub to: String,
    pub departure_date: NaiveDate,
    pub fare_id: String,
    pub passengers: Vec<Passenger>,
    pub sort_by: SortKey,
}

fn step_failed(step: BookingStep, error: Option<&String>) -> AppError {
    AppError::StepFailed {
        step,
        message: error.cloned().unwrap_or_default(),
    }
}

/// Picks a free seat on the loaded map, preferring window seats near the front.
fn pick_seat(session: &BookingSession, flight_id: &str, taken: &[String]) -> Option<String> {
    let prefs = SeatPreferences {
        window: true,
        front: true,
        ..Default::default()
    };
    let free = |id: &str| {
        !taken.iter().any(|t| t == id) && session.seat_map.seat_by_id(id).is_some_and(|s| s.is_selectable())
    };
    recommend_seats(flight_id, prefs)
        .recommendations
        .into_iter()
        .find(|id| free(id))
        .or_else(|| {
            session
                .seat_map
                .state()
                .layout
                .iter()
                .map(|s| s.id.clone())
                .find(|id| free(id))
        })
}

/// Drives one session from search to a confirmed booking, picking the top
/// result and the best available seat for each passenger.
pub async fn book_itinerary(
    workflow: &BookingWorkflow,
    session: &mut BookingSession,
    itinerary: &Itinerary,
    today: NaiveDate,
) -> Result<BookingRecord, AppError> {
    let params = SearchParams::new(
        &itinerary.from,
        &itinerary.to,
        itinerary.departure_date,
        u32::try_from(itinerary.passengers.len()).unwrap_or(u32::MAX),
    );
    if workflow.submit_search(session, params).await? != RequestStatus::Succeeded {
        return Err(step_failed(BookingStep::Results, session.results.state().error.as_ref()));
    }
    session.results.dispatch(ResultsAction::SetSortBy(itinerary.sort_by));

    let flight = session
        .results
        .filtered_sorted()
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NoFlights {
            from: itinerary.from.clone(),
            to: itinerary.to.clone(),
        })?;
    info!(flight = %flight.flight.flight_number, total = flight.total_price, "selected flight");
    workflow.select_flight(session, &flight.flight.id)?;

    workflow.submit_details(session, itinerary.passengers.clone(), &itinerary.fare_id, today)?;

    if workflow.load_seat_map(session).await? != RequestStatus::Succeeded {
        return Err(step_failed(BookingStep::Seats, session.seat_map.state().error.as_ref()));
    }
    let mut seats = Vec::new();
    for _ in &itinerary.passengers {
        let seat = pick_seat(session, &flight.flight.id, &seats)
            .ok_or_else(|| AppError::NoSeat(flight.flight.id.clone()))?;
        workflow.toggle_seat(session, &seat)?;
        seats.push(seat);
    }
    workflow.submit_seats(session)?;

    let breakdown = workflow.review_total(session)?;
    info!(
        base_fare = breakdown.base_fare,
        seats = breakdown.seat_charges,
        taxes = breakdown.taxes_and_fees,
        total = breakdown.total,
        "reviewing booking"
    );

    if workflow.confirm_booking(session).await? != RequestStatus::Succeeded {
        return Err(step_failed(BookingStep::Review, session.booking.state().confirmation_error.as_ref()));
    }
    session
        .booking
        .state()
        .confirmed_booking
        .clone()
        .ok_or_else(|| step_failed(BookingStep::Confirmed, None))
}
