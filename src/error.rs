//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The phone to edit is not in the record
    #[error("Phone not found")]
    PhoneNotFound(String),

    /// A new field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors returned by command handlers.
///
/// The display string of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for a command
    #[error("Invalid arguments. Usage: {usage}")]
    InvalidArguments { usage: &'static str },

    /// No contact with that name
    #[error("{0} not found.")]
    ContactNotFound(String),

    /// Unknown command word or unrecognised answer
    #[error("Invalid command.")]
    InvalidCommand,

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record mutation failed
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Errors that can occur while loading or saving the contact file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or holds invalid contact data
    #[error("Invalid contact file: {0}")]
    Json(#[from] serde_json::Error),

    /// The document has no top-level "contacts" object
    #[error("Invalid contact file: missing \"contacts\" key")]
    MissingContacts,
}

/// Errors that end the interactive session.
#[derive(Error, Debug)]
pub enum ReplError {
    /// Writing to the console failed
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Saving on exit failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Result of a command handler: the message to print on success.
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
