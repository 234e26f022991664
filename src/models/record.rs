//! Record model representing one contact.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name, an ordered list of phones and an optional birthday.
///
/// Serialized as `{"name": ..., "phones": [...], "birthday": "DD.MM.YYYY" | null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    phones: Vec<Phone>,

    /// Missing, `null` and `""` all read as unset
    #[serde(default, deserialize_with = "deserialize_birthday")]
    birthday: Option<Birthday>,
}

/// Custom deserializer for birthdays that treats an empty string as unset
fn deserialize_birthday<'de, D>(deserializer: D) -> Result<Option<Birthday>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    match text.as_deref() {
        None | Some("") => Ok(None),
        Some(text) => Birthday::parse(text)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record holding a single, already validated phone.
    pub fn with_phone(name: impl Into<String>, phone: Phone) -> Self {
        Self {
            name: Name::new(name),
            phones: vec![phone],
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// On error the record is unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        debug!(name = %self.name, %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if no phone equals `old`
    /// - `RecordError::Validation` if `new` is not a valid phone
    ///
    /// The record is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let slot = self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        *slot = Phone::new(new)?;
        debug!(name = %self.name, old, new, "Phone edited");
        Ok(())
    }

    /// Remove every phone equal to `phone`. Absent values are ignored.
    pub fn delete_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    ///
    /// On error the previous birthday is kept.
    pub fn add_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::parse(date)?;
        debug!(name = %self.name, %birthday, "Birthday set");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
