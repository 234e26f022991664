//! Command handlers for the interactive contact book.
//!
//! - **parser**: splits an input line into a [`Command`] and its arguments
//! - **handlers**: one function per command, each returning a
//!   [`CommandResult`](crate::error::CommandResult)

pub mod handlers;
pub mod parser;

pub use handlers::{execute, Prompt, OVERWRITE_QUESTION};
pub use parser::{parse_input, Command, COMMAND_LIST};
