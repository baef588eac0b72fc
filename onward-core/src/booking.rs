use chrono::{DateTime, NaiveDate, Utc};
use onward_shared::Masked;
use serde::{Deserialize, Serialize};

use crate::fare::FareBundle;
use crate::flight::Flight;
use crate::passenger::Passenger;
use crate::seat::SelectedSeat;

pub const DEFAULT_CONTACT_EMAIL: &str = "test@example.com";
pub const DEFAULT_CONTACT_PHONE: &str = "123-456-7890";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Masked<String>,
    pub phone: String,
}

impl ContactInfo {
    /// Contact details taken from the lead passenger.
    pub fn from_lead(passengers: &[Passenger]) -> Self {
        let email = passengers
            .first()
            .map(|p| p.email.expose().trim())
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_CONTACT_EMAIL);
        Self {
            email: Masked::new(email.to_string()),
            phone: DEFAULT_CONTACT_PHONE.to_string(),
        }
    }
}

/// Everything the confirmation collaborator needs, assembled from the booking state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    pub flight: Flight,
    pub passengers: Vec<Passenger>,
    pub seats: Vec<SelectedSeat>,
    pub fare_bundle: Option<FareBundle>,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base_fare: i32,
    pub seat_charges: i32,
    pub taxes_and_fees: i32,
    pub total: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

/// Full record returned by a successful confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRecord {
    pub id: String,
    pub booking_reference: String,
    pub status: BookingStatus,
    pub flight: Flight,
    pub passengers: Vec<Passenger>,
    pub seats: Vec<SelectedSeat>,
    pub fare_bundle: Option<FareBundle>,
    pub contact_info: ContactInfo,
    pub pricing: PriceBreakdown,
    pub currency: String,
    pub ticket_numbers: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfirmation {
    pub success: bool,
    pub booking_reference: Option<String>,
    pub message: Option<String>,
    pub booking: Option<BookingRecord>,
}

impl BookingConfirmation {
    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            booking_reference: None,
            message: Some(message.to_string()),
            booking: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutePoint {
    pub code: String,
    pub city: String,
}

/// Denormalized snapshot kept in the user's booking history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingHistoryEntry {
    pub id: String,
    pub booking_reference: String,
    pub status: BookingStatus,
    pub airline: String,
    pub flight_number: String,
    pub from: RoutePoint,
    pub to: RoutePoint,
    pub seats: Vec<String>,
    pub passengers: u32,
    pub fare_class: Option<String>,
    pub total_price: i32,
    pub travel_date: NaiveDate,
    pub booking_date: NaiveDate,
}

impl BookingHistoryEntry {
    /// Travel date falls back to `booking_date` when the flight carries no date.
    pub fn from_record(record: &BookingRecord) -> Self {
        let booking_date = record.created_at.date_naive();
        Self {
            id: record.id.clone(),
            booking_reference: record.booking_reference.clone(),
            status: record.status,
            airline: record.flight.airline.clone(),
            flight_number: record.flight.flight_number.clone(),
            from: RoutePoint {
                code: record.flight.departure.airport.clone(),
                city: record.flight.departure.city.clone(),
            },
            to: RoutePoint {
                code: record.flight.arrival.airport.clone(),
                city: record.flight.arrival.city.clone(),
            },
            seats: record.seats.iter().map(|s| s.id.clone()).collect(),
            passengers: u32::try_from(record.passengers.len()).unwrap_or(u32::MAX),
            fare_class: record.fare_bundle.as_ref().map(|f| f.name.clone()),
            total_price: record.pricing.total,
            travel_date: record.flight.departure.date.unwrap_or(booking_date),
            booking_date,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserBookings {
    pub upcoming: Vec<BookingHistoryEntry>,
    pub past: Vec<BookingHistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancellationReceipt {
    pub success: bool,
    pub booking_reference: String,
    pub status: BookingStatus,
    pub refund_amount: i32,
    pub refund_date: NaiveDate,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_from_lead_passenger() {
        let lead = Passenger::new("Ada", "Lovelace", NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(), "ada@example.com");
        let contact = ContactInfo::from_lead(&[lead]);
        assert_eq!(contact.email.expose(), "ada@example.com");
        assert_eq!(contact.phone, DEFAULT_CONTACT_PHONE);
    }

    #[test]
    fn test_contact_fallback_email() {
        let contact = ContactInfo::from_lead(&[]);
        assert_eq!(contact.email.expose(), DEFAULT_CONTACT_EMAIL);

        let blank = Passenger::new("Ada", "Lovelace", NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(), "");
        assert_eq!(ContactInfo::from_lead(&[blank]).email.expose(), DEFAULT_CONTACT_EMAIL);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&BookingStatus::Cancelled).unwrap(), "\"cancelled\"");
    }
}
