use contact_book::error::{StorageError, StorageResult};
use contact_book::repositories::{codec, BookRepository};
use contact_book::AddressBook;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the encoded book in memory, so every save/load goes through the same
/// codec as the file repository, and tracks method calls for verification.
/// Clones share state.
#[allow(dead_code)]
#[derive(Clone, Debug, Default)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<Vec<u8>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
    recovered: Arc<Mutex<Option<Vec<u8>>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new empty MockBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: &AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(codec::encode(book).unwrap());
        repo
    }

    /// Create a repository holding arbitrary bytes, valid or not.
    pub fn with_bytes(bytes: &[u8]) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(bytes.to_vec());
        repo
    }

    /// Raw bytes last saved (or seeded), if anything.
    pub fn stored_bytes(&self) -> Option<Vec<u8>> {
        self.stored.lock().unwrap().clone()
    }

    /// Decode whatever the recovery store holds, if anything.
    pub fn recovered_book(&self) -> Option<AddressBook> {
        self.recovered
            .lock()
            .unwrap()
            .as_ref()
            .map(|bytes| codec::decode(bytes).unwrap())
    }

    /// Seed the recovery store with arbitrary bytes.
    pub fn set_recovered_bytes(&self, bytes: &[u8]) {
        *self.recovered.lock().unwrap() = Some(bytes.to_vec());
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Decode whatever was last saved, if anything.
    pub fn stored_book(&self) -> Option<AddressBook> {
        self.stored
            .lock()
            .unwrap()
            .as_ref()
            .map(|bytes| codec::decode(bytes).unwrap())
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        match self.stored.lock().unwrap().as_ref() {
            Some(bytes) => codec::decode(bytes),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }

        let bytes = codec::encode(book)?;
        *self.stored.lock().unwrap() = Some(bytes);
        Ok(())
    }

    fn recovery(&self) -> Self {
        self.track_call("recovery");

        Self {
            stored: Arc::clone(&self.recovered),
            call_counts: Arc::clone(&self.call_counts),
            fail_saves: Arc::clone(&self.fail_saves),
            recovered: Arc::new(Mutex::new(None)),
        }
    }
}
