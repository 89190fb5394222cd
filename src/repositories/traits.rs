use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// The whole book is the unit of persistence: it is loaded and saved in one
/// piece, never record by record.
pub trait BookRepository {
    /// Load the stored book. A store that holds nothing yet yields an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// A separate store to work against when this one cannot be loaded, so
    /// the unreadable data is never overwritten.
    fn recovery(&self) -> Self
    where
        Self: Sized;
}
