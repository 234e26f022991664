//! Data models for the contact book.
//!
//! A [`Record`] is one contact; an [`AddressBook`] owns every record keyed
//! by name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use record::Record;
