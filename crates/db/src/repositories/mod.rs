//! Repository abstractions for data access.
//!
//! Repositories hide the `SeaORM` implementation details from the rest of
//! the application.

pub mod entry;

pub use entry::EntryRepository;
