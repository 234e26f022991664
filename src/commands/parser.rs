//! Input line parsing.

use crate::error::CommandError;
use std::str::FromStr;

/// Commands listed when the assistant starts.
pub const COMMAND_LIST: &str = "Available commands:\n\
hello\n\
add <name> <phone>\n\
all\n\
change <name> <old_phone> <new_phone>\n\
phone <name>\n\
add-birthday <name> <DD.MM.YYYY>\n\
show-birthday <name>\n\
birthdays\n\
close or exit";

/// A command word recognised by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    All,
    Change,
    Phone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    /// Argument synopsis shown when a command gets the wrong arguments.
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add <name> <phone>",
            Self::All => "all",
            Self::Change => "change <name> <old_phone> <new_phone>",
            Self::Phone => "phone <name>",
            Self::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Self::ShowBirthday => "show-birthday <name>",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a command word, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Self::Hello),
            "add" => Ok(Self::Add),
            "all" => Ok(Self::All),
            "change" => Ok(Self::Change),
            "phone" => Ok(Self::Phone),
            "add-birthday" => Ok(Self::AddBirthday),
            "show-birthday" => Ok(Self::ShowBirthday),
            "birthdays" => Ok(Self::Birthdays),
            "close" | "exit" => Ok(Self::Exit),
            _ => Err(CommandError::InvalidCommand),
        }
    }
}

/// Split a line on whitespace into the command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}
