//! Text encoding of [`crate::Configuration`] for `config.json`.

pub mod json;

pub use json::{decode_config, encode_config, ConfigError};
