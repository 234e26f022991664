//! Contact Book - a command-line assistant for names, phone numbers and
//! birthdays, stored in a JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: Contact records and the address book
//! - **repositories**: Loading and saving the address book
//! - **commands**: Input parsing and command handlers
//! - **repl**: The interactive read-eval-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError, ReplError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repl::Repl;
pub use repositories::{ContactRepository, JsonContactRepository};
