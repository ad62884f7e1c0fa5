//! Hunt settings: the top-level [`Configuration`] entity.
//!
//! A `Configuration` is built once with hard-coded defaults and then either
//! replaced field-by-field from a persisted file ([`Configuration::adopt`]) or
//! written out unchanged on first run.  After startup it is read-only.
//!
//! # Serde default values
//!
//! The whole struct is annotated with `#[serde(default)]`, so any key that is
//! absent from `config.json` takes the value from [`Configuration::default()`]
//! rather than a zero value.  A partially written file therefore keeps the
//! constructor defaults for everything it does not mention.

use serde::{Deserialize, Serialize};

use crate::domain::matching::{CustomPrice, Properties};
use crate::domain::rarity::RarityConfig;
use crate::domain::rewards::RewardsConfig;

/// Upper bound for [`Configuration::hunt_amount`].
///
/// Values above this are clamped when a file is adopted.
pub const MAX_HUNT_AMOUNT: i32 = 28;

const DEFAULT_HUNT_DURATION_MINUTES: i32 = 60;
const DEFAULT_HUNT_AMOUNT: i32 = 7;

/// Every tunable hunt setting, as stored in `config.json`.
///
/// JSON keys are the camelCase forms of the field names
/// (`individualHunts`, `huntAmount`, `matchProperties`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// Track hunts per player instead of one global set.
    pub individual_hunts: bool,
    /// Announce when a hunt ends.
    pub send_hunt_end_message: bool,
    /// Announce when a hunt begins.
    pub send_hunt_begin_message: bool,
    /// How long each hunt lasts, in minutes.  Not bounds-checked.
    pub hunt_duration: i32,
    /// How many hunts run at once.  Capped at [`MAX_HUNT_AMOUNT`] on load.
    pub hunt_amount: i32,
    /// Spawn-weight thresholds separating the rarity tiers.
    pub rarity: RarityConfig,
    /// Reward paid per rarity tier.
    pub rewards: RewardsConfig,
    /// Which attributes a caught pokemon must match to complete a hunt.
    pub match_properties: Properties,
    /// Per-species price overrides, in file order.
    pub custom_prices: Vec<CustomPrice>,
    /// Species that are never picked for a hunt.
    pub blacklist: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            individual_hunts: false,
            send_hunt_end_message: true,
            send_hunt_begin_message: true,
            hunt_duration: DEFAULT_HUNT_DURATION_MINUTES,
            hunt_amount: DEFAULT_HUNT_AMOUNT,
            rarity: RarityConfig::default(),
            rewards: RewardsConfig::default(),
            match_properties: Properties::default(),
            custom_prices: vec![CustomPrice::default()],
            blacklist: Vec::new(),
        }
    }
}

impl Configuration {
    /// Replaces every field with the one from `candidate`.
    ///
    /// `hunt_amount` is the only normalised field: anything above
    /// [`MAX_HUNT_AMOUNT`] is stored as `MAX_HUNT_AMOUNT`.  When that happens
    /// the rejected value is returned so the caller can report it.
    pub fn adopt(&mut self, candidate: Configuration) -> Option<i32> {
        let requested = candidate.hunt_amount;
        *self = candidate;
        self.hunt_amount = clamp_hunt_amount(requested);

        (requested > MAX_HUNT_AMOUNT).then_some(requested)
    }

    /// Returns `true` if `name` matches a blacklist entry, ignoring case.
    ///
    /// Entries are scanned in order and the scan stops at the first match.
    /// The comparison folds each character independently and does not depend
    /// on the current locale.
    pub fn blacklist_contains(&self, name: &str) -> bool {
        self.blacklist
            .iter()
            .any(|entry| eq_ignore_case(entry, name))
    }
}

/// Caps a hunt amount at [`MAX_HUNT_AMOUNT`].
pub fn clamp_hunt_amount(amount: i32) -> i32 {
    amount.min(MAX_HUNT_AMOUNT)
}

/// Compares character by character, each side folded to exactly one char
/// (upper-case, then lower-case of that).  Multi-char expansions such as
/// `'İ' -> "i\u{307}"` keep only their first char, so lengths never shift.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| fold_char(x) == fold_char(y))
}

fn fold_char(c: char) -> char {
    let upper = c.to_uppercase().next().unwrap_or(c);
    upper.to_lowercase().next().unwrap_or(upper)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
