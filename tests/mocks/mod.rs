//! In-memory test doubles.

mod mock_book_repository;

pub use mock_book_repository::MockBookRepository;
