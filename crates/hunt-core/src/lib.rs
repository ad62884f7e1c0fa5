//! # hunt-core
//!
//! Shared library for the hunt configuration: the settings model, its nested
//! reward and matching tables, and the JSON codec for `config.json`.
//!
//! It has no dependencies on the file system, an async runtime, or a logging
//! backend; loading and persisting live in the `hunt-config` crate.
//!
//! - **`domain`** – [`Configuration`] and the types it is built from, plus the
//!   two rules that act on it: the hunt-amount clamp and the case-insensitive
//!   blacklist lookup.
//!
//! - **`format`** – Converts a `Configuration` to and from the pretty-printed
//!   JSON stored on disk.

pub mod domain;
pub mod format;

// Re-export the most-used types at the crate root so callers can write
// `hunt_core::Configuration` instead of `hunt_core::domain::settings::Configuration`.
pub use domain::matching::{CustomPrice, Properties};
pub use domain::rarity::{Rarity, RarityConfig};
pub use domain::rewards::{Reward, RewardsConfig};
pub use domain::settings::{clamp_hunt_amount, Configuration, MAX_HUNT_AMOUNT};
pub use format::{decode_config, encode_config, ConfigError};
