use anyhow::Context;
use chrono::{Days, NaiveDate, Utc};
use onward_app::{book_itinerary, AppState, Itinerary};
use onward_core::{Passenger, SortKey};
use onward_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onward_app=debug,onward_booking=debug,onward_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config ({}), using defaults", e);
        Config::default()
    });
    tracing::info!("Starting Onward booking run, tax rate {}", config.business_rules.tax_rate);

    let state = AppState::from_config(&config)?;
    let workflow = state.workflow();
    let mut session = state.new_session();

    let today = Utc::now().date_naive();
    let departure_date = today.checked_add_days(Days::new(30)).unwrap_or(today);
    let date_of_birth = NaiveDate::from_ymd_opt(1990, 12, 10).context("invalid date of birth")?;
    let itinerary = Itinerary {
        from: "JFK".to_string(),
        to: "LHR".to_string(),
        departure_date,
        fare_id: "main".to_string(),
        passengers: vec![Passenger::new("Ada", "Lovelace", date_of_birth, "ada@example.com")],
        sort_by: SortKey::Cheapest,
    };

    let record = book_itinerary(&workflow, &mut session, &itinerary, today)
        .await
        .context("scripted booking failed")?;
    tracing::info!(
        "Booked {} on {} ({} -> {}), total ${}",
        record.booking_reference,
        record.flight.flight_number,
        record.flight.departure.airport,
        record.flight.arrival.airport,
        record.pricing.total
    );

    workflow.fetch_bookings(&mut session).await?;
    let upcoming = session.profile.upcoming(today);
    tracing::info!("{} upcoming trips", upcoming.len());
    for trip in upcoming {
        tracing::info!("  {} {} on {}", trip.booking_reference, trip.flight_number, trip.travel_date);
    }

    println!("{}", serde_json::to_string_pretty(&record.pricing)?);
    workflow.acknowledge(&mut session)?;
    Ok(())
}
