pub mod guards;
pub mod models;
pub mod profile;
pub mod results;
pub mod seat_map;
pub mod session;
pub mod store;
pub mod workflow;

pub use guards::{check_step, Redirect};
pub use models::{BookingState, BookingStep};
pub use profile::{ProfileAction, ProfileState, ProfileStore, UserProfile};
pub use results::{ResultFilters, ResultsAction, ResultsState, ResultsStore};
pub use seat_map::{SeatMapAction, SeatMapState, SeatMapStore};
pub use session::BookingSession;
pub use store::{reduce, BookingAction, BookingError, BookingStore};
pub use workflow::{BookingWorkflow, WorkflowConfig, WorkflowError};
