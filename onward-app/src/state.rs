use crate::error::AppError;
use onward_booking::{BookingSession, BookingWorkflow, WorkflowConfig};
use onward_catalog::{PricingConfig, PricingEngine};
use onward_core::{BookingClient, FlightSearchClient, SeatMapClient};
use onward_store::app_config::{BusinessRules, Config};
use onward_store::{MockBookingClient, MockFlightSearch, MockSeatMapClient};
use std::sync::Arc;

/// Collaborators and rules shared by every session.
#[derive(Clone)]
pub struct AppState {
    pub flights: Arc<dyn FlightSearchClient>,
    pub seat_maps: Arc<dyn SeatMapClient>,
    pub bookings: Arc<dyn BookingClient>,
    pub pricing: PricingEngine,
    pub business_rules: BusinessRules,
}

impl AppState {
    /// Wires the in-process mock backends.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let pricing = PricingEngine::new(PricingConfig::from_rate(config.business_rules.tax_rate)?);
        let simulation = &config.simulation;

        Ok(Self {
            flights: Arc::new(MockFlightSearch::new(simulation.search_latency())),
            seat_maps: Arc::new(MockSeatMapClient::new(simulation.seat_map_latency())),
            bookings: Arc::new(MockBookingClient::new(simulation, pricing.clone())),
            pricing,
            business_rules: config.business_rules.clone(),
        })
    }

    pub fn workflow(&self) -> BookingWorkflow {
        BookingWorkflow::new(
            self.flights.clone(),
            self.seat_maps.clone(),
            self.bookings.clone(),
            self.pricing.clone(),
            WorkflowConfig {
                confirmation_timeout: self.business_rules.confirmation_timeout(),
                require_seat_per_passenger: self.business_rules.require_seat_per_passenger,
            },
        )
    }

    pub fn new_session(&self) -> BookingSession {
        BookingSession::new(self.business_rules.default_max_price)
    }
}
