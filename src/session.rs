//! The current address book and where it is persisted.
//!
//! Command handlers receive a `&mut Session` instead of reaching for a
//! process-wide book.

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::BookRepository;

/// Working state of one run of the contact book.
#[derive(Debug)]
pub struct Session<R: BookRepository> {
    book: AddressBook,
    repo: R,
    page_size: usize,
    dirty: bool,
    load_error: Option<String>,
    read_only: Option<String>,
}

impl<R: BookRepository> Session<R> {
    /// Load the book from `repo` and start a session on it.
    ///
    /// `page_size` is the default used when paging without an explicit size.
    pub fn open(repo: R, page_size: usize) -> StorageResult<Self> {
        let book = repo.load()?;
        Ok(Self::with_book(book, repo, page_size))
    }

    /// Load the book from `repo`, falling back to its recovery store when the
    /// stored book cannot be read.
    ///
    /// The unreadable store is never written by the returned session: the
    /// session continues whatever book the recovery store holds (usually
    /// none) and saves there. If the recovery store cannot be read either,
    /// the session starts empty and every save fails with
    /// `StorageError::ReadOnly`.
    pub fn open_or_recover(repo: R, page_size: usize) -> Self {
        let load_error = match repo.load() {
            Ok(book) => return Self::with_book(book, repo, page_size),
            Err(e) => e,
        };
        tracing::error!(error = %load_error, "Failed to load address book, using the recovery store");

        let recovery = repo.recovery();
        let mut session = match recovery.load() {
            Ok(book) => Self::with_book(book, recovery, page_size),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load recovery store, saving is disabled");
                let mut session = Self::with_book(AddressBook::new(), recovery, page_size);
                session.read_only = Some(e.to_string());
                session
            }
        };
        session.load_error = Some(load_error.to_string());
        session
    }

    /// Start a session on an in-memory book without loading.
    pub fn with_book(book: AddressBook, repo: R, page_size: usize) -> Self {
        Self {
            book,
            repo,
            page_size,
            dirty: false,
            load_error: None,
            read_only: None,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Apply `change` to the book. The session counts as modified only when
    /// `change` succeeds.
    ///
    /// Failing changes must leave the book as it was; every `Record` and
    /// `AddressBook` operation that returns an error does.
    pub fn mutate<T, E>(
        &mut self,
        change: impl FnOnce(&mut AddressBook) -> Result<T, E>,
    ) -> Result<T, E> {
        let result = change(&mut self.book);
        if result.is_ok() {
            self.dirty = true;
        }
        result
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The repository saves go to.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Why the original store could not be loaded, if the session had to
    /// fall back to the recovery store.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only.is_some()
    }

    /// True when the book may differ from what was last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist the whole book.
    ///
    /// # Errors
    ///
    /// `StorageError::ReadOnly` if the session has nowhere safe to write,
    /// otherwise whatever the repository reports. The session stays dirty.
    pub fn save(&mut self) -> StorageResult<()> {
        if let Some(reason) = &self.read_only {
            return Err(StorageError::ReadOnly(reason.clone()));
        }
        self.repo.save(&self.book)?;
        self.dirty = false;
        Ok(())
    }
}
