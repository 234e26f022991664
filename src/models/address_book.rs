//! The address book: every contact keyed by name.

use super::record::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, warn};

/// How many days ahead `get_upcoming_birthdays` looks, inclusive.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday falls within the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,

    /// This year's occurrence, moved off the weekend to Monday
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format("%Y-%m-%d"))
    }
}

/// Collection of records keyed by name, kept in insertion order.
///
/// Names are unique; adding a record under an existing name replaces the
/// old record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "Replacing record");
                self.records[index] = record;
            }
            None => {
                debug!(name = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    /// Find a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove a record by name, returning it if it was present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        debug!(name, "Deleting record");
        Some(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Birthdays in the next week, counted from the local date.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Birthdays whose occurrence this year is 0 to 7 days after `today`.
    ///
    /// Occurrences on Saturday or Sunday are reported on the following
    /// Monday. The window is checked before the shift, so a reported date can
    /// fall up to two days past the window.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = occurrence_in_year(birthday.date(), today.year());
                let days_until = (occurrence - today).num_days();

                if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date: move_off_weekend(occurrence),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// The birthday's month and day in `year`. Feb 29 falls back to Feb 28 in
/// non-leap years.
fn occurrence_in_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}

fn move_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

// Serialized as a JSON object of name -> record, in insertion order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.records.iter().map(|r| (r.name().as_str(), r)))
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AddressBookVisitor)
    }
}

struct AddressBookVisitor;

impl<'de> Visitor<'de> for AddressBookVisitor {
    type Value = AddressBook;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of contact names to records")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut book = AddressBook::new();
        while let Some((key, record)) = map.next_entry::<String, Record>()? {
            if key != record.name().as_str() {
                warn!(
                    key = %key,
                    name = %record.name(),
                    "Contact key differs from record name, using record name"
                );
            }
            book.add_record(record);
        }
        Ok(book)
    }
}
