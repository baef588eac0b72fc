use onward_core::{Seat, SeatMap, SeatMapMetadata, SeatStatus};
use onward_shared::RequestStatus;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use onward_core::seat::MISSING_FLIGHT_ID;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatMapState {
    pub flight_id: Option<String>,
    pub layout: Vec<Seat>,
    pub metadata: Option<SeatMapMetadata>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatMapAction {
    FetchStarted(String),
    FetchSucceeded(SeatMap),
    FetchFailed(String),
    /// Local overlay only; nothing is sent to the seat map backend.
    UpdateSeatStatusLocally { seat_id: String, status: SeatStatus },
    Clear,
}

/// Seat map for the flight being booked.
#[derive(Debug, Default)]
pub struct SeatMapStore {
    state: SeatMapState,
}

impl SeatMapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SeatMapState {
        &self.state
    }

    pub fn dispatch(&mut self, action: SeatMapAction) {
        let state = &mut self.state;
        match action {
            SeatMapAction::FetchStarted(flight_id) => {
                state.status = RequestStatus::Loading;
                state.error = None;
                state.flight_id = Some(flight_id);
            }
            SeatMapAction::FetchSucceeded(map) => {
                state.status = RequestStatus::Succeeded;
                state.flight_id = Some(map.flight_id);
                state.layout = map.layout;
                state.metadata = Some(map.metadata);
            }
            SeatMapAction::FetchFailed(message) => {
                state.status = RequestStatus::Failed;
                state.error = Some(message);
                state.layout.clear();
                state.metadata = None;
            }
            SeatMapAction::UpdateSeatStatusLocally { seat_id, status } => {
                // occupied seats never change
                if let Some(seat) = state
                    .layout
                    .iter_mut()
                    .find(|s| s.id == seat_id && s.status != SeatStatus::Occupied)
                {
                    seat.status = status;
                }
            }
            SeatMapAction::Clear => *state = SeatMapState::default(),
        }
        debug!(status = %self.state.status, seats = self.state.layout.len(), "seat map updated");
    }

    pub fn seat_by_id(&self, seat_id: &str) -> Option<&Seat> {
        self.state.layout.iter().find(|s| s.id == seat_id)
    }

    /// True when a map for `flight_id` is already loaded.
    pub fn is_loaded_for(&self, flight_id: &str) -> bool {
        self.state.status == RequestStatus::Succeeded && self.state.flight_id.as_deref() == Some(flight_id)
    }
}
