//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact: its name, phone numbers
//! and birthday. Phones and birthdays are validated at construction time so
//! an invalid value can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
