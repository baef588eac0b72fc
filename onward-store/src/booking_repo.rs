use crate::app_config::SimulationConfig;
use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use onward_catalog::PricingEngine;
use onward_core::repository::{BookingClient, ClientError};
use onward_core::{
    BookingConfirmation, BookingHistoryEntry, BookingRecord, BookingRequest, BookingStatus,
    CancellationReceipt, RoutePoint, UserBookings,
};
use rand::Rng;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const CONFIRMED_MESSAGE: &str = "Booking confirmed successfully!";
pub const MISSING_DETAILS: &str = "Passengers and seats are required to confirm a booking.";
pub const CANCELLED_MESSAGE: &str =
    "Booking cancelled successfully. Refund will be processed within 7-10 business days.";
pub const REFUND_AMOUNT: i32 = 500;

const CODE_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn random_code(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

/// Six character reference prefixed with `ONW`.
pub fn booking_reference() -> String {
    format!("ONW{}", random_code(6))
}

pub fn ticket_number() -> String {
    format!("TKT{}", random_code(10))
}

struct Latencies {
    booking: Duration,
    history: Duration,
    cancellation: Duration,
}

/// Confirmation backend that keeps everything in memory.
///
/// Charges are computed with the same engine the review screen uses, so the
/// confirmed total always matches what the traveller was shown.
pub struct MockBookingClient {
    latencies: Latencies,
    pricing: PricingEngine,
    confirmed: RwLock<Vec<BookingHistoryEntry>>,
}

impl MockBookingClient {
    pub fn new(simulation: &SimulationConfig, pricing: PricingEngine) -> Self {
        Self {
            latencies: Latencies {
                booking: simulation.booking_latency(),
                history: simulation.history_latency(),
                cancellation: simulation.cancellation_latency(),
            },
            pricing,
            confirmed: RwLock::new(Vec::new()),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn point(code: &str, city: &str) -> RoutePoint {
    RoutePoint { code: code.to_string(), city: city.to_string() }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    reference: &str,
    status: BookingStatus,
    airline: &str,
    number: &str,
    from: RoutePoint,
    to: RoutePoint,
    seats: &[&str],
    fare_class: &str,
    total_price: i32,
    travel_date: NaiveDate,
    booking_date: NaiveDate,
) -> BookingHistoryEntry {
    BookingHistoryEntry {
        id: format!("hist-{}", reference.to_lowercase()),
        booking_reference: reference.to_string(),
        status,
        airline: airline.to_string(),
        flight_number: number.to_string(),
        from,
        to,
        seats: seats.iter().map(|s| s.to_string()).collect(),
        passengers: u32::try_from(seats.len()).unwrap_or(u32::MAX),
        fare_class: Some(fare_class.to_string()),
        total_price,
        travel_date,
        booking_date,
    }
}

/// Seeded history every user sees.
fn seeded_history() -> UserBookings {
    UserBookings {
        upcoming: vec![entry(
            "ONW7X3F9",
            BookingStatus::Confirmed,
            "SkyWings",
            "SW 4521",
            point("JFK", "New York"),
            point("LHR", "London"),
            &["12A"],
            "Main Cabin",
            609,
            date(2025, 12, 15),
            date(2025, 11, 1),
        )],
        past: vec![
            entry(
                "ONW2M8K1",
                BookingStatus::Completed,
                "Atlantic Air",
                "AA 1832",
                point("LAX", "Los Angeles"),
                point("NRT", "Tokyo"),
                &["8C", "8D"],
                "Business",
                1978,
                date(2025, 11, 10),
                date(2025, 10, 2),
            ),
            entry(
                "ONW5P9L4",
                BookingStatus::Completed,
                "EuroConnect",
                "EC 7291",
                point("MIA", "Miami"),
                point("CDG", "Paris"),
                &["21F"],
                "Basic Economy",
                412,
                date(2025, 10, 22),
                date(2025, 9, 14),
            ),
        ],
    }
}

#[async_trait]
impl BookingClient for MockBookingClient {
    async fn confirm_booking(&self, request: &BookingRequest) -> Result<BookingConfirmation, ClientError> {
        tracing::info!(
            "Mock call: confirm_booking for flight {} ({} passengers)",
            request.flight.id,
            request.passengers.len()
        );
        tokio::time::sleep(self.latencies.booking).await;

        if request.passengers.is_empty() || request.seats.is_empty() {
            return Ok(BookingConfirmation::rejected(MISSING_DETAILS));
        }

        let reference = booking_reference();
        let record = BookingRecord {
            id: Uuid::new_v4().to_string(),
            booking_reference: reference.clone(),
            status: BookingStatus::Confirmed,
            flight: request.flight.clone(),
            passengers: request.passengers.clone(),
            seats: request.seats.clone(),
            fare_bundle: request.fare_bundle.clone(),
            contact_info: request.contact_info.clone(),
            pricing: self.pricing.compute_total(
                request.fare_bundle.as_ref(),
                Some(&request.flight),
                &request.seats,
            ),
            currency: "USD".to_string(),
            ticket_numbers: request.passengers.iter().map(|_| ticket_number()).collect(),
            created_at: Utc::now(),
        };

        self.confirmed
            .write()
            .await
            .push(BookingHistoryEntry::from_record(&record));
        tracing::info!("Booking {} confirmed, total {}", reference, record.pricing.total);

        Ok(BookingConfirmation {
            success: true,
            booking_reference: Some(reference),
            message: Some(CONFIRMED_MESSAGE.to_string()),
            booking: Some(record),
        })
    }

    async fn fetch_user_bookings(&self, user_id: &str) -> Result<UserBookings, ClientError> {
        tracing::info!("Mock call: fetch_user_bookings for {}", user_id);
        tokio::time::sleep(self.latencies.history).await;

        let today = Utc::now().date_naive();
        let mut bookings = seeded_history();
        for entry in self.confirmed.read().await.iter() {
            if entry.status == BookingStatus::Confirmed && entry.travel_date >= today {
                bookings.upcoming.push(entry.clone());
            } else {
                bookings.past.push(entry.clone());
            }
        }
        Ok(bookings)
    }

    async fn cancel_booking(&self, booking_reference: &str) -> Result<CancellationReceipt, ClientError> {
        tracing::info!("Mock call: cancel_booking {}", booking_reference);
        tokio::time::sleep(self.latencies.cancellation).await;

        if let Some(entry) = self
            .confirmed
            .write()
            .await
            .iter_mut()
            .find(|e| e.booking_reference == booking_reference)
        {
            entry.status = BookingStatus::Cancelled;
        }

        let today = Utc::now().date_naive();
        Ok(CancellationReceipt {
            success: true,
            booking_reference: booking_reference.to_string(),
            status: BookingStatus::Cancelled,
            refund_amount: REFUND_AMOUNT,
            refund_date: today.checked_add_days(Days::new(7)).unwrap_or(today),
            message: CANCELLED_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;
    use onward_catalog::fare_by_id;
    use onward_core::{ContactInfo, Passenger, SelectedSeat};

    fn client() -> MockBookingClient {
        MockBookingClient::new(&SimulationConfig::instant(), PricingEngine::default())
    }

    fn request(passengers: usize, seats: &[(&str, i32)]) -> BookingRequest {
        let passengers: Vec<Passenger> = (0..passengers)
            .map(|i| Passenger::new("Ada", &format!("Traveller{}", i), date(1990, 12, 10), "ada@example.com"))
            .collect();
        let mut flight = mock_data::flights().remove(0);
        flight.departure.date = Some(date(2099, 1, 5));
        BookingRequest {
            contact_info: ContactInfo::from_lead(&passengers),
            flight,
            passengers,
            seats: seats.iter().map(|(id, price)| SelectedSeat::new(id, *price)).collect(),
            fare_bundle: fare_by_id("main"),
        }
    }

    #[test]
    fn test_reference_format() {
        let reference = booking_reference();
        assert_eq!(reference.len(), 9);
        assert!(reference.starts_with("ONW"));
        assert!(reference[3..].bytes().all(|b| CODE_CHARSET.contains(&b)));

        let ticket = ticket_number();
        assert_eq!(ticket.len(), 13);
        assert!(ticket.starts_with("TKT"));
    }

    #[tokio::test]
    async fn test_confirm_prices_with_engine() {
        let client = client();
        let confirmation = client
            .confirm_booking(&request(2, &[("3A", 45), ("3B", 45)]))
            .await
            .unwrap();

        assert!(confirmation.success);
        assert_eq!(confirmation.message.as_deref(), Some(CONFIRMED_MESSAGE));
        let record = confirmation.booking.unwrap();
        assert_eq!(Some(record.booking_reference.clone()), confirmation.booking_reference);
        assert_eq!(record.ticket_numbers.len(), 2);
        // 75 + 90 = 165, tax 24.75 -> 25
        assert_eq!(record.pricing.taxes_and_fees, 25);
        assert_eq!(record.pricing.total, 190);
    }

    #[tokio::test]
    async fn test_confirm_rejects_missing_details() {
        let client = client();
        let confirmation = client.confirm_booking(&request(1, &[])).await.unwrap();
        assert!(!confirmation.success);
        assert_eq!(confirmation.message.as_deref(), Some(MISSING_DETAILS));
        assert!(confirmation.booking.is_none());
    }

    #[tokio::test]
    async fn test_history_includes_confirmed() {
        let client = client();
        let seeded = client.fetch_user_bookings("mockUser123").await.unwrap();
        assert_eq!(seeded.upcoming.len(), 1);
        assert_eq!(seeded.past.len(), 2);

        let confirmation = client.confirm_booking(&request(1, &[("12A", 45)])).await.unwrap();
        let reference = confirmation.booking_reference.unwrap();

        let bookings = client.fetch_user_bookings("mockUser123").await.unwrap();
        assert_eq!(bookings.upcoming.len(), 2);
        assert!(bookings.upcoming.iter().any(|b| b.booking_reference == reference));
    }

    #[tokio::test]
    async fn test_cancel_moves_booking_to_past() {
        let client = client();
        let confirmation = client.confirm_booking(&request(1, &[("12A", 45)])).await.unwrap();
        let reference = confirmation.booking_reference.unwrap();

        let receipt = client.cancel_booking(&reference).await.unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.status, BookingStatus::Cancelled);
        assert_eq!(receipt.refund_amount, REFUND_AMOUNT);
        assert_eq!(receipt.message, CANCELLED_MESSAGE);

        let bookings = client.fetch_user_bookings("mockUser123").await.unwrap();
        assert_eq!(bookings.upcoming.len(), 1);
        assert!(bookings
            .past
            .iter()
            .any(|b| b.booking_reference == reference && b.status == BookingStatus::Cancelled));
    }
}
