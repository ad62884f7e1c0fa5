//! JSON codec for `config.json`.
//!
//! File format: a single pretty-printed JSON object whose keys are the
//! camelCase field names of [`Configuration`]:
//!
//! ```text
//! {
//!   "individualHunts": false,
//!   "sendHuntEndMessage": true,
//!   "sendHuntBeginMessage": true,
//!   "huntDuration": 60,
//!   "huntAmount": 7,
//!   "rarity": { ... },
//!   "rewards": { ... },
//!   "matchProperties": { ... },
//!   "customPrices": [ { ... } ],
//!   "blacklist": []
//! }
//! ```
//!
//! Unknown keys are ignored.  Missing keys keep their default values.  A
//! value of the wrong shape anywhere in the document fails the whole decode.

use thiserror::Error;
use tracing::debug;

use crate::domain::settings::Configuration;

/// Errors produced while converting between [`Configuration`] and text.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text is not valid JSON or does not match the configuration shape.
    #[error("failed to parse config JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The configuration could not be rendered as JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Parses the contents of `config.json`.
///
/// The returned value is exactly what the file says; no clamping is applied
/// here.  See [`Configuration::adopt`] for the load-time normalisation.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed text or mistyped values.
///
/// # Examples
///
/// ```rust
/// use hunt_core::decode_config;
///
/// let cfg = decode_config(r#"{ "huntAmount": 3 }"#).unwrap();
/// assert_eq!(cfg.hunt_amount, 3);
/// assert_eq!(cfg.hunt_duration, 60);
/// ```
pub fn decode_config(text: &str) -> Result<Configuration, ConfigError> {
    let cfg: Configuration = serde_json::from_str(text).map_err(ConfigError::Parse)?;
    debug!(
        hunt_amount = cfg.hunt_amount,
        blacklist = cfg.blacklist.len(),
        "decoded hunt config"
    );
    Ok(cfg)
}

/// Renders `cfg` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if serde_json rejects the value.
pub fn encode_config(cfg: &Configuration) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(cfg).map_err(ConfigError::Serialize)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_camel_case_top_level_keys() {
        // Arrange
        let cfg = Configuration::default();

        // Act
        let text = encode_config(&cfg).expect("encode");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

        // Assert
        let mut keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "blacklist",
                "customPrices",
                "huntAmount",
                "huntDuration",
                "individualHunts",
                "matchProperties",
                "rarity",
                "rewards",
                "sendHuntBeginMessage",
                "sendHuntEndMessage",
            ]
        );
    }

    #[test]
    fn test_decode_does_not_clamp() {
        let cfg = decode_config(r#"{ "huntAmount": 50 }"#).expect("decode");
        assert_eq!(cfg.hunt_amount, 50);
    }

    #[test]
    fn test_decode_empty_object_gives_defaults() {
        let cfg = decode_config("{}").expect("decode");
        assert_eq!(cfg, Configuration::default());
    }

    #[test]
    fn test_decode_garbage_returns_parse_error() {
        let result = decode_config("{ this is not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_decode_mistyped_nested_value_fails_whole_document() {
        let result = decode_config(r#"{ "huntAmount": 5, "rarity": "high" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
