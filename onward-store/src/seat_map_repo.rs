use onward_catalog::generate_seat_map;
use onward_core::repository::{ClientError, SeatMapClient};
use onward_core::seat::MISSING_FLIGHT_ID;
use onward_core::SeatMap;
use async_trait::async_trait;
use std::time::Duration;

/// Serves generated seat maps. The same flight id always gets the same map.
pub struct MockSeatMapClient {
    latency: Duration,
}

impl MockSeatMapClient {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SeatMapClient for MockSeatMapClient {
    async fn fetch_seat_map(&self, flight_id: &str) -> Result<SeatMap, ClientError> {
        tracing::info!("Mock call: fetch_seat_map for flight {}", flight_id);
        if flight_id.trim().is_empty() {
            return Err(MISSING_FLIGHT_ID.into());
        }
        tokio::time::sleep(self.latency).await;
        Ok(generate_seat_map(flight_id))
    }
}
