//! Rarity tiers and the spawn-weight thresholds that separate them.

use serde::{Deserialize, Serialize};

/// The four rarity tiers a hunt target can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    UltraRare,
}

/// Minimum spawn weight for each tier.
///
/// A species with weight `>= common` is common, `>= uncommon` is uncommon,
/// `>= rare` is rare and anything lighter is ultra rare.  The thresholds are
/// stored as written; nothing checks that they are in descending order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RarityConfig {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
}

impl Default for RarityConfig {
    fn default() -> Self {
        Self {
            common: 2.0,
            uncommon: 0.5,
            rare: 0.1,
        }
    }
}

impl RarityConfig {
    /// Maps a spawn weight onto a tier.
    pub fn classify(&self, weight: f64) -> Rarity {
        if weight >= self.common {
            Rarity::Common
        } else if weight >= self.uncommon {
            Rarity::Uncommon
        } else if weight >= self.rare {
            Rarity::Rare
        } else {
            Rarity::UltraRare
        }
    }
}
