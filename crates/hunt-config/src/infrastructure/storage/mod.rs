//! Storage infrastructure: configuration file persistence.
//!
//! - **`fs`** – [`fs::FsPersistence`], the tokio file-system implementation of
//!   [`FilePersistence`](crate::application::ports::FilePersistence).
//! - **`mock`** – [`mock::MemoryPersistence`], an in-memory stand-in that
//!   counts reads and writes and can be told to fail writes.

pub mod fs;
pub mod mock;
