//! Command handlers.
//!
//! Each handler validates its arguments, performs at most one change to the
//! address book and returns the message to show. Argument and validation
//! problems come back as [`CommandError`], never as a panic.

use super::parser::Command;
use crate::domain::Phone;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record, UpcomingBirthday};
use tracing::{debug, info};

/// Question asked before `add` replaces an existing contact.
pub const OVERWRITE_QUESTION: &str = "Do you want to overwrite the contact? (yes/no): ";

/// Source of answers for interactive questions.
pub trait Prompt {
    /// Ask `question` and return the answer, or `None` if no answer can be
    /// read.
    fn ask(&mut self, question: &str) -> Option<String>;
}

/// Run `command` against `book`.
///
/// `Exit` is only acknowledged here; saving is up to the caller.
pub fn execute(
    command: Command,
    args: &[&str],
    book: &mut AddressBook,
    prompt: &mut dyn Prompt,
) -> CommandResult {
    debug!(?command, ?args, "Executing command");
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(args, book, prompt),
        Command::All => Ok(show_all(book)),
        Command::Change => change_phone(args, book),
        Command::Phone => show_phones(args, book),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => Ok(birthdays(&book.get_upcoming_birthdays())),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

/// `add <name> <phone>`: add a contact, asking before overwriting one.
///
/// Overwriting replaces the whole record, so earlier phones and the
/// birthday are dropped.
pub fn add_contact(args: &[&str], book: &mut AddressBook, prompt: &mut dyn Prompt) -> CommandResult {
    let (name, phone) = match args {
        [name, phone, ..] => (*name, *phone),
        _ => return Err(invalid_arguments(Command::Add)),
    };
    let phone = Phone::new(phone)?;

    if !book.contains(name) {
        book.add_record(Record::with_phone(name, phone));
        info!(name, "Contact added");
        return Ok("Contact added.".to_string());
    }

    let answer = prompt.ask(OVERWRITE_QUESTION).unwrap_or_default();
    match answer.trim().to_lowercase().as_str() {
        "yes" => {
            book.add_record(Record::with_phone(name, phone));
            info!(name, "Contact overwritten");
            Ok("Contact updated".to_string())
        }
        "no" => Ok("Contact not added".to_string()),
        _ => Err(CommandError::InvalidCommand),
    }
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_phone(args: &[&str], book: &mut AddressBook) -> CommandResult {
    let [name, old, new] = exact_args::<3>(args, Command::Change)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    record.edit_phone(old, new)?;
    Ok("Phone number changed".to_string())
}

/// `phone <name>`: the contact's phones joined with `"; "`.
pub fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult {
    let name = first_arg(args, Command::Phone)?;
    Ok(find(book, name)?.phones_display())
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult {
    let [name, date] = exact_args::<2>(args, Command::AddBirthday)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    record.add_birthday(date)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult {
    let name = first_arg(args, Command::ShowBirthday)?;
    Ok(match find(book, name)?.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday not set.".to_string(),
    })
}

/// `birthdays`: one `name: date` line per contact to congratulate.
pub fn birthdays(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays in the next week.".to_string();
    }

    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    book.to_string()
}

fn find<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record, CommandError> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn first_arg<'a>(args: &[&'a str], command: Command) -> Result<&'a str, CommandError> {
    args.first()
        .copied()
        .ok_or_else(|| invalid_arguments(command))
}

fn exact_args<'a, const N: usize>(
    args: &[&'a str],
    command: Command,
) -> Result<[&'a str; N], CommandError> {
    <[&'a str; N]>::try_from(args).map_err(|_| invalid_arguments(command))
}

fn invalid_arguments(command: Command) -> CommandError {
    CommandError::InvalidArguments {
        usage: command.usage(),
    }
}
