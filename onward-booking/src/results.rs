use onward_core::search::{refine, sort};
use onward_core::{FlightResult, SortKey, StopsFilter};
use onward_shared::RequestStatus;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_MAX_PRICE: i32 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultFilters {
    pub sort_by: SortKey,
    pub max_price: i32,
    pub stops: Vec<StopsFilter>,
    pub airlines: Vec<String>,
}

impl ResultFilters {
    pub fn with_max_price(max_price: i32) -> Self {
        Self {
            sort_by: SortKey::Best,
            max_price,
            stops: Vec::new(),
            airlines: Vec::new(),
        }
    }
}

impl Default for ResultFilters {
    fn default() -> Self {
        Self::with_max_price(DEFAULT_MAX_PRICE)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultsState {
    pub results: Vec<FlightResult>,
    pub status: RequestStatus,
    pub error: Option<String>,
    pub filters: ResultFilters,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsAction {
    SetSortBy(SortKey),
    SetMaxPrice(i32),
    ToggleStopFilter(StopsFilter),
    ToggleAirlineFilter(String),
    ClearFilters,
    ClearFlights,
    FetchStarted,
    FetchSucceeded(Vec<FlightResult>),
    FetchFailed(String),
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|i| *i == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}

/// Search results and the listing filters applied on top of them.
#[derive(Debug)]
pub struct ResultsStore {
    state: ResultsState,
    default_max_price: i32,
}

impl ResultsStore {
    pub fn new(default_max_price: i32) -> Self {
        Self {
            state: ResultsState {
                filters: ResultFilters::with_max_price(default_max_price),
                ..Default::default()
            },
            default_max_price,
        }
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ResultsAction) {
        let state = &mut self.state;
        match action {
            ResultsAction::SetSortBy(key) => state.filters.sort_by = key,
            ResultsAction::SetMaxPrice(max) => state.filters.max_price = max,
            ResultsAction::ToggleStopFilter(stop) => toggle(&mut state.filters.stops, stop),
            ResultsAction::ToggleAirlineFilter(code) => toggle(&mut state.filters.airlines, code),
            ResultsAction::ClearFilters => {
                state.filters = ResultFilters::with_max_price(self.default_max_price);
            }
            ResultsAction::ClearFlights => {
                state.results.clear();
                state.status = RequestStatus::Idle;
                state.error = None;
            }
            ResultsAction::FetchStarted => {
                state.status = RequestStatus::Loading;
                state.error = None;
            }
            ResultsAction::FetchSucceeded(results) => {
                state.status = RequestStatus::Succeeded;
                state.results = results;
            }
            ResultsAction::FetchFailed(message) => {
                state.status = RequestStatus::Failed;
                state.error = Some(message);
                state.results.clear();
            }
        }
        debug!(status = %self.state.status, results = self.state.results.len(), "results updated");
    }

    /// Results after the listing filters, in the chosen sort order.
    pub fn filtered_sorted(&self) -> Vec<FlightResult> {
        let filters = &self.state.filters;
        let refined = refine(
            &self.state.results,
            &filters.stops,
            Some(filters.max_price),
            &filters.airlines,
        );
        sort(refined, filters.sort_by)
    }

    pub fn find(&self, flight_id: &str) -> Option<&FlightResult> {
        self.state.results.iter().find(|r| r.flight.id == flight_id)
    }
}

impl Default for ResultsStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PRICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use onward_core::{Flight, FlightEndpoint, StopDescriptor};

    fn result(id: &str, code: &str, price: i32, minutes: u32, hour: u32, stops: StopDescriptor) -> FlightResult {
        let mut flight = Flight::new(
            id,
            "Test Air",
            code,
            &format!("{} {}", code, id),
            FlightEndpoint::new("JFK", "New York", NaiveTime::from_hms_opt(hour, 0, 0).unwrap()),
            FlightEndpoint::new("LHR", "London", NaiveTime::from_hms_opt(hour, 30, 0).unwrap()),
            minutes,
            price,
        );
        flight.stops = stops;
        FlightResult::new(flight, 1)
    }

    fn loaded() -> ResultsStore {
        let mut store = ResultsStore::default();
        store.dispatch(ResultsAction::FetchStarted);
        store.dispatch(ResultsAction::FetchSucceeded(vec![
            result("1", "SW", 459, 435, 18, StopDescriptor::NonStop),
            result("2", "AA", 389, 450, 8, StopDescriptor::NonStop),
            result("3", "EC", 329, 525, 11, StopDescriptor::via(&["DUB"])),
            result("4", "PA", 589, 420, 14, StopDescriptor::via(&["DUB", "KEF"])),
        ]));
        store
    }

    fn ids(results: &[FlightResult]) -> Vec<&str> {
        results.iter().map(|r| r.flight.id.as_str()).collect()
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut store = loaded();
        assert_eq!(store.state().status, RequestStatus::Succeeded);
        assert_eq!(store.state().results.len(), 4);

        store.dispatch(ResultsAction::FetchStarted);
        store.dispatch(ResultsAction::FetchFailed("network down".to_string()));
        assert_eq!(store.state().status, RequestStatus::Failed);
        assert_eq!(store.state().error.as_deref(), Some("network down"));
        assert!(store.state().results.is_empty());
    }

    #[test]
    fn test_default_view_is_unfiltered() {
        let store = loaded();
        assert_eq!(ids(&store.filtered_sorted()), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_sort_options() {
        let mut store = loaded();
        store.dispatch(ResultsAction::SetSortBy(SortKey::Cheapest));
        assert_eq!(ids(&store.filtered_sorted()), vec!["3", "2", "1", "4"]);
        store.dispatch(ResultsAction::SetSortBy(SortKey::Fastest));
        assert_eq!(ids(&store.filtered_sorted()), vec!["4", "1", "2", "3"]);
        store.dispatch(ResultsAction::SetSortBy(SortKey::Earliest));
        assert_eq!(ids(&store.filtered_sorted()), vec!["2", "3", "4", "1"]);
    }

    #[test]
    fn test_filters_toggle_and_clear() {
        let mut store = loaded();
        store.dispatch(ResultsAction::ToggleStopFilter(StopsFilter::NonStop));
        store.dispatch(ResultsAction::ToggleStopFilter(StopsFilter::TwoPlus));
        assert_eq!(ids(&store.filtered_sorted()), vec!["1", "2", "4"]);

        store.dispatch(ResultsAction::ToggleStopFilter(StopsFilter::TwoPlus));
        store.dispatch(ResultsAction::SetMaxPrice(400));
        assert_eq!(ids(&store.filtered_sorted()), vec!["2"]);

        store.dispatch(ResultsAction::ClearFilters);
        store.dispatch(ResultsAction::ToggleAirlineFilter("EC".to_string()));
        assert_eq!(ids(&store.filtered_sorted()), vec!["3"]);

        store.dispatch(ResultsAction::ClearFilters);
        assert_eq!(store.state().filters, ResultFilters::default());
    }

    #[test]
    fn test_clear_flights() {
        let mut store = loaded();
        store.dispatch(ResultsAction::ClearFlights);
        assert!(store.state().results.is_empty());
        assert_eq!(store.state().status, RequestStatus::Idle);
        assert!(store.find("1").is_none());
    }
}
