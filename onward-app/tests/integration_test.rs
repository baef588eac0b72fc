use chrono::NaiveDate;
use onward_app::{book_itinerary, AppError, AppState, Itinerary};
use onward_booking::{BookingStep, WorkflowError};
use onward_core::{BookingStatus, Passenger, SortKey};
use onward_shared::RequestStatus;
use onward_store::app_config::{Config, SimulationConfig};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn instant_state() -> AppState {
    let config = Config {
        simulation: SimulationConfig::instant(),
        ..Config::default()
    };
    AppState::from_config(&config).unwrap()
}

fn itinerary(from: &str, to: &str, passengers: usize) -> Itinerary {
    Itinerary {
        from: from.to_string(),
        to: to.to_string(),
        departure_date: date(2099, 3, 14),
        fare_id: "main".to_string(),
        passengers: (0..passengers)
            .map(|i| Passenger::new("Grace", &format!("Hopper{}", i), date(1985, 6, 1), "grace@example.com"))
            .collect(),
        sort_by: SortKey::Cheapest,
    }
}

#[tokio::test]
async fn test_end_to_end_booking() {
    let state = instant_state();
    let workflow = state.workflow();
    let mut session = state.new_session();
    let today = date(2099, 1, 1);

    let record = book_itinerary(&workflow, &mut session, &itinerary("JFK", "LHR", 2), today)
        .await
        .unwrap();

    // cheapest JFK -> LHR is EC 7291
    assert_eq!(record.flight.flight_number, "EC 7291");
    assert_eq!(record.status, BookingStatus::Confirmed);
    assert_eq!(record.passengers.len(), 2);
    assert_eq!(record.seats.len(), 2);
    assert_ne!(record.seats[0].id, record.seats[1].id);
    assert_eq!(record.ticket_numbers.len(), 2);
    assert!(record.booking_reference.starts_with("ONW"));

    let booking = session.booking.state();
    assert_eq!(booking.step, BookingStep::Confirmed);
    assert_eq!(booking.confirmation_status, RequestStatus::Succeeded);
    assert_eq!(booking.booking_reference.as_deref(), Some(record.booking_reference.as_str()));

    // the charged total is the one shown on review
    let shown = session.booking.price_breakdown(workflow.pricing());
    assert_eq!(record.pricing, shown);

    let history = &session.profile.state().booking_history;
    assert_eq!(history[0].booking_reference, record.booking_reference);
    assert_eq!(history[0].travel_date, date(2099, 3, 14));
}

#[tokio::test]
async fn test_history_and_cancellation_after_booking() {
    let state = instant_state();
    let workflow = state.workflow();
    let mut session = state.new_session();
    let today = date(2099, 1, 1);

    let record = book_itinerary(&workflow, &mut session, &itinerary("LAX", "NRT", 1), today)
        .await
        .unwrap();
    workflow.acknowledge(&mut session).unwrap();
    assert_eq!(session.booking.step(), BookingStep::Search);

    assert_eq!(workflow.fetch_bookings(&mut session).await.unwrap(), RequestStatus::Succeeded);
    assert!(session
        .profile
        .upcoming(today)
        .iter()
        .any(|b| b.booking_reference == record.booking_reference));

    let receipt = workflow.cancel_booking(&mut session, &record.booking_reference).await.unwrap();
    assert_eq!(receipt.status, BookingStatus::Cancelled);
    let entry = session
        .profile
        .state()
        .booking_history
        .iter()
        .find(|b| b.booking_reference == record.booking_reference)
        .unwrap();
    assert_eq!(entry.status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn test_route_without_flights() {
    let state = instant_state();
    let workflow = state.workflow();
    let mut session = state.new_session();

    let err = book_itinerary(&workflow, &mut session, &itinerary("LHR", "JFK", 1), date(2099, 1, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NoFlights { .. }));
    assert_eq!(session.results.state().status, RequestStatus::Succeeded);
    assert!(session.results.state().results.is_empty());
}

#[tokio::test]
async fn test_invalid_passenger_rejected_before_seats() {
    let state = instant_state();
    let workflow = state.workflow();
    let mut session = state.new_session();
    let mut trip = itinerary("JFK", "LHR", 1);
    trip.passengers[0] = Passenger::new("Grace", "Hopper", date(1985, 6, 1), "not-an-email");

    let err = book_itinerary(&workflow, &mut session, &trip, date(2099, 1, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Workflow(WorkflowError::Validation(_))));
    assert_eq!(session.booking.step(), BookingStep::Details);
    assert!(session.seat_map.state().layout.is_empty());
}

#[test]
fn test_invalid_tax_rate_rejected() {
    let mut config = Config::default();
    config.business_rules.tax_rate = -1.0;
    assert!(matches!(AppState::from_config(&config), Err(AppError::Pricing(_))));
}
