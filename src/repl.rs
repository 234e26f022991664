//! The read-eval-print loop.
//!
//! Reads commands from any `BufRead`, prints results to any `Write`, and
//! saves the address book through its repository when the user leaves.

use crate::commands::{execute, parse_input, Command, Prompt, COMMAND_LIST};
use crate::error::ReplError;
use crate::models::AddressBook;
use crate::repositories::ContactRepository;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const COMMAND_PROMPT: &str = "Enter a command: ";

/// Console input and output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn say(&mut self, message: &str) -> std::io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, question: &str) -> Option<String> {
        match self.read_line(question) {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "Failed to read answer");
                None
            }
        }
    }
}

/// An interactive session over one address book.
pub struct Repl<P, R, W> {
    book: AddressBook,
    repository: P,
    console: Console<R, W>,
}

impl<P, R, W> Repl<P, R, W>
where
    P: ContactRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(book: AddressBook, repository: P, input: R, output: W) -> Self {
        Self {
            book,
            repository,
            console: Console::new(input, output),
        }
    }

    /// Run until `close`/`exit` or end of input, then save and return the
    /// final address book.
    ///
    /// # Errors
    ///
    /// Console write failures and a failed save end the session.
    pub fn run(mut self) -> Result<AddressBook, ReplError> {
        self.console.say("Welcome to the assistant bot!")?;
        self.console.say(COMMAND_LIST)?;

        while let Some(line) = self.console.read_line(COMMAND_PROMPT)? {
            let Some((word, args)) = parse_input(&line) else {
                continue;
            };

            let command = match word.parse::<Command>() {
                Ok(Command::Exit) => break,
                Ok(command) => command,
                Err(e) => {
                    debug!(word, "Unknown command");
                    self.console.say(&e.to_string())?;
                    continue;
                }
            };

            let message = match execute(command, &args, &mut self.book, &mut self.console) {
                Ok(message) => message,
                Err(e) => {
                    debug!(?command, error = ?e, "Command rejected");
                    e.to_string()
                }
            };
            self.console.say(&message)?;
        }

        info!("Session ending, saving contacts");
        self.repository.save(&self.book)?;
        self.console.say("Good bye!")?;
        Ok(self.book)
    }
}
