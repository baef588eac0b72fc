use crate::mock_data;
use onward_core::repository::{ClientError, FlightSearchClient};
use onward_core::{Flight, SearchParams};
use async_trait::async_trait;
use std::time::Duration;

/// In-process flight search over the static inventory.
pub struct MockFlightSearch {
    flights: Vec<Flight>,
    latency: Duration,
}

impl MockFlightSearch {
    pub fn new(latency: Duration) -> Self {
        Self::with_flights(mock_data::flights(), latency)
    }

    pub fn with_flights(flights: Vec<Flight>, latency: Duration) -> Self {
        Self { flights, latency }
    }
}

#[async_trait]
impl FlightSearchClient for MockFlightSearch {
    async fn search_flights(&self, params: &SearchParams) -> Result<Vec<Flight>, ClientError> {
        tracing::info!("Mock call: search_flights {} -> {} on {}", params.from, params.to, params.departure_date);
        tokio::time::sleep(self.latency).await;

        params.validate()?;

        Ok(self
            .flights
            .iter()
            .filter(|f| f.serves_route(&params.from, &params.to))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn params(from: &str, to: &str) -> SearchParams {
        SearchParams::new(from, to, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(), 1)
    }

    #[tokio::test]
    async fn test_returns_route_only() {
        let client = MockFlightSearch::new(Duration::ZERO);
        let flights = client.search_flights(&params("JFK", "LHR")).await.unwrap();
        assert_eq!(flights.len(), 4);
        assert!(flights.iter().all(|f| f.serves_route("JFK", "LHR")));
    }

    #[tokio::test]
    async fn test_rejects_invalid_params() {
        let client = MockFlightSearch::new(Duration::ZERO);
        let err = client.search_flights(&params("JFK", "JFK")).await.unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let client = MockFlightSearch::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        client.search_flights(&params("LAX", "NRT")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
