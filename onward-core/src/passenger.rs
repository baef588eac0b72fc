use chrono::NaiveDate;
use onward_shared::Masked;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use crate::{CoreError, CoreResult};

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)+$",
    )
    .ok()
});

fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

/// A traveller entered on the details step. List order is passenger order
/// and lines up with seat order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Masked<NaiveDate>,
    pub email: Masked<String>,
}

impl Passenger {
    pub fn new(first_name: &str, last_name: &str, date_of_birth: NaiveDate, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth: Masked::new(date_of_birth),
            email: Masked::new(email.to_string()),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Required fields present, plausible email, born no later than `today`.
    pub fn validate(&self, today: NaiveDate) -> CoreResult<()> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(CoreError::ValidationError("First and last name are required".to_string()));
        }
        if !is_valid_email(self.email.expose().trim()) {
            return Err(CoreError::ValidationError("A valid email address is required".to_string()));
        }
        if *self.date_of_birth.expose() > today {
            return Err(CoreError::ValidationError("Date of birth cannot be in the future".to_string()));
        }
        Ok(())
    }
}

/// Partial update merged field-by-field into an existing passenger.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassengerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
}

impl PassengerPatch {
    pub fn apply(self, passenger: &mut Passenger) {
        if let Some(first_name) = self.first_name {
            passenger.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            passenger.last_name = last_name;
        }
        if let Some(dob) = self.date_of_birth {
            passenger.date_of_birth = Masked::new(dob);
        }
        if let Some(email) = self.email {
            passenger.email = Masked::new(email);
        }
    }
}
