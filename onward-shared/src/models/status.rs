use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a single request/response call to a collaborator.
///
/// Transitions are `Idle -> Loading -> {Succeeded | Failed}`; a new request
/// from any settled state re-enters `Loading`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        *self == RequestStatus::Loading
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, RequestStatus::Succeeded | RequestStatus::Failed)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestStatus::Idle => "idle",
            RequestStatus::Loading => "loading",
            RequestStatus::Succeeded => "succeeded",
            RequestStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&RequestStatus::Succeeded).unwrap();
        assert_eq!(json, "\"succeeded\"");
        assert_eq!(RequestStatus::default(), RequestStatus::Idle);
    }

    #[test]
    fn test_settled_states() {
        assert!(!RequestStatus::Idle.is_settled());
        assert!(!RequestStatus::Loading.is_settled());
        assert!(RequestStatus::Failed.is_settled());
        assert!(RequestStatus::Loading.is_loading());
    }
}
