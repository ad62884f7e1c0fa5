//! Application layer use cases for the hunt config.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure data and rules in `hunt-core`) and the infrastructure (file system,
//! logging backend).
//!
//! Code in this layer:
//!
//! - **Orchestrates** domain objects to fulfil a goal (e.g., "make sure a
//!   valid configuration exists before the hunt scheduler starts").
//! - **Depends on abstractions** (traits in `ports`) rather than concrete
//!   implementations, so storage and logging can be swapped in tests.
//! - **Contains no direct file-system access**.
//!
//! # Sub-modules
//!
//! - **`ports`** – The `FilePersistence` and `EventLog` traits the store is
//!   built against.
//!
//! - **`config_store`** – Owns the live configuration, runs the
//!   load-or-create sequence at startup and serves read-only accessors.

pub mod config_store;
pub mod ports;
