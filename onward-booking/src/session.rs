use crate::profile::ProfileStore;
use crate::results::ResultsStore;
use crate::seat_map::SeatMapStore;
use crate::store::BookingStore;
use tracing::{info_span, Span};
use uuid::Uuid;

/// All client-side state for one traveller's visit.
///
/// Every store has exactly one writer: the workflow holding `&mut` to the
/// session. That borrow is also what keeps confirmations one at a time.
#[derive(Debug)]
pub struct BookingSession {
    pub id: Uuid,
    pub booking: BookingStore,
    pub results: ResultsStore,
    pub seat_map: SeatMapStore,
    pub profile: ProfileStore,
    span: Span,
}

impl BookingSession {
    pub fn new(default_max_price: i32) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            booking: BookingStore::new(),
            results: ResultsStore::new(default_max_price),
            seat_map: SeatMapStore::new(),
            profile: ProfileStore::new(),
            span: info_span!("booking_session", session_id = %id),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new(crate::results::DEFAULT_MAX_PRICE)
    }
}
