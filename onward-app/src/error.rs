use onward_booking::{BookingStep, WorkflowError};
use onward_catalog::PricingError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error("No flights found from {from} to {to}")]
    NoFlights { from: String, to: String },

    #[error("No selectable seat on flight {0}")]
    NoSeat(String),

    #[error("Step {step} failed: {message}")]
    StepFailed { step: BookingStep, message: String },
}
