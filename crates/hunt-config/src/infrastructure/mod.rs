//! Infrastructure layer for the hunt config.
//!
//! Contains the OS-facing adapters behind the application ports: file-system
//! storage for `config.json` and the `tracing`-backed event log.
//!
//! **Dependency rule**: this layer may depend on `application` and `hunt_core`,
//! but MUST NOT be imported by the `application` or domain layers.

pub mod logging;
pub mod storage;
