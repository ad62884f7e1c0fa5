//! Domain entities for the hunt configuration.
//!
//! This module contains pure data and rules with no infrastructure
//! dependencies: no file system, no async runtime, no logging backend.
//! Everything here can be constructed and tested in isolation.
//!
//! - **`settings`** – the top-level [`settings::Configuration`] plus the
//!   hunt-amount clamp and blacklist lookup.
//! - **`rarity`** – spawn-weight thresholds and the [`rarity::Rarity`] tiers.
//! - **`rewards`** – the reward paid per tier.
//! - **`matching`** – completion rules and per-species price overrides.

pub mod matching;
pub mod rarity;
pub mod rewards;
pub mod settings;
