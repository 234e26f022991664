//! End-to-end tests for the interactive session.
//!
//! Each test feeds a scripted stdin into the REPL, captures stdout, and
//! checks the replies along with what was saved through the repository.

mod mocks;

use contact_book::{AddressBook, Record, Repl, ReplError};
use mocks::MockContactRepository;
use std::io::Cursor;

const PROMPT: &str = "Enter a command: ";

/// Run a session over `input` and return the replies, one per prompt.
fn run_session(
    book: AddressBook,
    repo: &MockContactRepository,
    input: &str,
) -> (Vec<String>, Result<AddressBook, ReplError>) {
    let mut output = Vec::new();
    let result = Repl::new(book, repo.clone(), Cursor::new(input.to_string()), &mut output).run();
    let text = String::from_utf8(output).unwrap();

    let replies = text
        .split(PROMPT)
        .skip(1)
        .map(|reply| reply.trim_end().to_string())
        .collect();
    (replies, result)
}

#[test]
fn test_add_phone_change_flow() {
    let repo = MockContactRepository::new();
    let (replies, result) = run_session(
        AddressBook::new(),
        &repo,
        "add Bob 1234567890\nphone Bob\nchange Bob 1234567890 0987654321\nphone Bob\nexit\n",
    );

    assert_eq!(
        replies,
        vec![
            "Contact added.",
            "1234567890",
            "Phone number changed",
            "0987654321",
            "Good bye!",
        ]
    );

    let book = result.unwrap();
    assert_eq!(book.find("Bob").unwrap().phones_display(), "0987654321");
    assert_eq!(repo.get_call_count("save"), 1);
    assert_eq!(repo.stored(), Some(book));
}

#[test]
fn test_welcome_banner() {
    let repo = MockContactRepository::new();
    let mut output = Vec::new();
    Repl::new(AddressBook::new(), repo, Cursor::new("close\n"), &mut output)
        .run()
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("Welcome to the assistant bot!\nAvailable commands:\nhello\n"));
    assert!(text.ends_with("Good bye!\n"));
}

#[test]
fn test_overwrite_confirmation() {
    let repo = MockContactRepository::new();
    let (replies, result) = run_session(
        AddressBook::new(),
        &repo,
        "add Bob 1234567890\nadd Bob 5555555555\nyes\nadd Bob 7777777777\nno\nall\nexit\n",
    );

    assert_eq!(
        replies,
        vec![
            "Contact added.",
            "Do you want to overwrite the contact? (yes/no): Contact updated",
            "Do you want to overwrite the contact? (yes/no): Contact not added",
            "Contact name: Bob, phones: 5555555555",
            "Good bye!",
        ]
    );
    assert_eq!(result.unwrap().len(), 1);
}

#[test]
fn test_errors_are_reported_and_session_continues() {
    let repo = MockContactRepository::new();
    let (replies, result) = run_session(
        AddressBook::new(),
        &repo,
        "dance\nadd Bob\nadd Bob 12\nphone Ann\nHELLO\nexit\n",
    );

    assert_eq!(
        replies,
        vec![
            "Invalid command.",
            "Invalid arguments. Usage: add <name> <phone>",
            "Invalid phone number: 12. Please put in 10 digits",
            "Ann not found.",
            "How can I help you?",
            "Good bye!",
        ]
    );
    assert!(result.unwrap().is_empty());
}

#[test]
fn test_birthday_commands() {
    let repo = MockContactRepository::new();
    let (replies, _) = run_session(
        AddressBook::new(),
        &repo,
        "add Ann 1234567890\nshow-birthday Ann\nadd-birthday Ann 31.02.1990\n\
         add-birthday Ann 28.02.1990\nshow-birthday Ann\nexit\n",
    );

    assert_eq!(
        replies,
        vec![
            "Contact added.",
            "Birthday not set.",
            "Invalid date format. Use DD.MM.YYYY",
            "Birthday added for Ann.",
            "1990-02-28",
            "Good bye!",
        ]
    );
}

#[test]
fn test_birthdays_without_any_set() {
    let repo = MockContactRepository::new();
    let (replies, _) = run_session(AddressBook::new(), &repo, "add Ann 1234567890\nbirthdays\nexit\n");
    assert_eq!(replies[1], "No upcoming birthdays in the next week.");
}

#[test]
fn test_blank_lines_are_ignored() {
    let repo = MockContactRepository::new();
    let (replies, _) = run_session(AddressBook::new(), &repo, "\n   \nhello\nexit\n");
    assert_eq!(replies, vec!["", "", "How can I help you?", "Good bye!"]);
}

#[test]
fn test_end_of_input_saves() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Existing"));
    let repo = MockContactRepository::new();

    let (replies, result) = run_session(book, &repo, "add Bob 1234567890\n");
    assert_eq!(replies.last().unwrap(), "Good bye!");

    let stored = repo.stored().unwrap();
    assert_eq!(stored, result.unwrap());
    assert_eq!(stored.len(), 2);
}

#[test]
fn test_save_failure_ends_with_error() {
    let repo = MockContactRepository::failing();
    let (replies, result) = run_session(AddressBook::new(), &repo, "exit\n");

    assert!(matches!(result, Err(ReplError::Storage(_))));
    assert_eq!(replies, vec![""]);
    assert_eq!(repo.get_call_count("save"), 1);
}
