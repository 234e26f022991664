use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::ContactRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk document: `{"contacts": {<name>: <record>, ...}}`.
#[derive(Serialize)]
struct ContactsDocumentRef<'a> {
    contacts: &'a AddressBook,
}

#[derive(Deserialize)]
struct ContactsDocument {
    contacts: Option<AddressBook>,
}

/// Contact repository backed by a single JSON file.
///
/// The file is written UTF-8, indented with four spaces, with non-ASCII
/// characters kept literal.
#[derive(Debug, Clone)]
pub struct JsonContactRepository {
    path: PathBuf,
}

impl JsonContactRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl ContactRepository for JsonContactRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No contact file yet, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let document: ContactsDocument = serde_json::from_str(&text)?;
        let book = document.contacts.ok_or(StorageError::MissingContacts)?;

        info!(path = %self.path.display(), contacts = book.len(), "Contacts loaded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        ContactsDocumentRef { contacts: book }.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                debug!(dir = %parent.display(), "Creating contact file directory");
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        fs::write(&self.path, buf).map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), contacts = book.len(), "Contacts saved");
        Ok(())
    }
}
