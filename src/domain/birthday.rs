//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are entered and stored in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Format birthdays are displayed in.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d";

// chrono accepts single-digit days and months for %d/%m, so the shape is
// checked separately.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

/// A contact's birthday: a calendar date parsed from `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "1990-06-15");
/// assert_eq!(birthday.format_stored(), "15.06.1990");
/// assert!(Birthday::parse("1990-06-15").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from strict `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not have
    /// that shape or names a date that does not exist (e.g. `31.02.2020`).
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Render in the `DD.MM.YYYY` storage format.
    pub fn format_stored(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }
}

// Serde support - serialize in storage format
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_stored())
    }
}

// Serde support - deserialize from storage format with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}
