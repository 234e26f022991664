//! Configuration management for the contact book.
//!
//! Settings come from environment variables, with an optional `.env` file.
//! Every setting has a default, so running with no environment at all uses
//! `addressbook.json` in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default contact file, relative to the working directory.
pub const DEFAULT_CONTACT_FILE: &str = "addressbook.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON contact file (default: "addressbook.json")
    pub contact_file: PathBuf,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: path of the contact file
    /// - `LOG_LEVEL`: logging level
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let contact_file = match env::var("CONTACT_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_CONTACT_FILE),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            contact_file,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contact_file: PathBuf::from(DEFAULT_CONTACT_FILE),
            log_level: "warn".to_string(),
        }
    }
}
