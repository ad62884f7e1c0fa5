//! Completion rules and per-species price overrides.

use serde::{Deserialize, Serialize};

/// Attributes a caught pokemon must share with the hunt target.
///
/// Species always has to match; each flag here adds one more requirement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Properties {
    pub abilities: bool,
    pub gender: bool,
    pub nature: bool,
    pub shiny: bool,
    pub form: bool,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            abilities: false,
            gender: false,
            nature: true,
            shiny: false,
            form: false,
        }
    }
}

/// Overrides the tier reward for one species (and optionally one form).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomPrice {
    pub species: String,
    /// Empty means every form of `species`.
    pub form: String,
    pub price: f64,
    pub commands: Vec<String>,
}

impl Default for CustomPrice {
    fn default() -> Self {
        Self {
            species: "magikarp".to_string(),
            form: String::new(),
            price: 1000.0,
            commands: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_default_only_checks_nature() {
        let props = Properties::default();
        assert!(props.nature);
        assert!(!props.abilities && !props.gender && !props.shiny && !props.form);
    }

    #[test]
    fn test_custom_price_default_is_magikarp_any_form() {
        let price = CustomPrice::default();
        assert_eq!(price.species, "magikarp");
        assert!(price.form.is_empty());
        assert!(price.commands.is_empty());
    }
}
