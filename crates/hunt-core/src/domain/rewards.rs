//! Reward table paid out when a hunt is completed.

use serde::{Deserialize, Serialize};

use crate::domain::rarity::Rarity;

/// What a player receives for completing one hunt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Reward {
    /// Currency paid to the player.
    pub price: f64,
    /// Server commands run on completion.  `{player}` is substituted by the
    /// hunt subsystem, not here.
    pub commands: Vec<String>,
}

impl Reward {
    fn priced(price: f64) -> Self {
        Self {
            price,
            commands: Vec::new(),
        }
    }
}

/// One [`Reward`] per [`Rarity`] tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RewardsConfig {
    pub common: Reward,
    pub uncommon: Reward,
    pub rare: Reward,
    pub ultra_rare: Reward,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            common: Reward::priced(100.0),
            uncommon: Reward::priced(250.0),
            rare: Reward::priced(500.0),
            ultra_rare: Reward::priced(1000.0),
        }
    }
}

impl RewardsConfig {
    pub fn for_rarity(&self, rarity: Rarity) -> &Reward {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Uncommon => &self.uncommon,
            Rarity::Rare => &self.rare,
            Rarity::UltraRare => &self.ultra_rare,
        }
    }
}
