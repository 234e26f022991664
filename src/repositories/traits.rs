use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// The whole book is loaded once at start-up and saved once on exit;
/// implementations never see partial updates.
pub trait ContactRepository {
    /// Load the stored address book, or an empty one if nothing is stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
