use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Holds passenger data (emails, birth dates) that must not show up in logs.
///
/// `Debug` and `Display` print a fixed mask; serialization writes the real
/// value because booking payloads need it.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Masked<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_debug_output_is_masked() {
        let email = Masked::new("jane@example.com".to_string());
        assert_eq!(format!("{:?}", email), "********");
        assert_eq!(format!("{}", email), "********");
        assert_eq!(email.expose(), "jane@example.com");
    }

    #[test]
    fn test_serialization_keeps_value() {
        let dob = Masked::new(NaiveDate::from_ymd_opt(1990, 1, 15).unwrap());
        let json = serde_json::to_string(&dob).unwrap();
        assert_eq!(json, "\"1990-01-15\"");

        let back: Masked<NaiveDate> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dob);
    }
}
