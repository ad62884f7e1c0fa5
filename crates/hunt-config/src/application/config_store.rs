//! ConfigStore: owns the live hunt configuration and loads it at startup.
//!
//! # Load-or-create (for beginners)
//!
//! [`ConfigStore::init`] runs exactly once, before the hunt subsystem starts:
//!
//! ```text
//! read hunt/config.json ──► parse ──► adopt (clamp huntAmount) ──► done
//!        │                    │
//!        └── missing ─────────┴── malformed ──► write defaults ──► done
//!                                                    │
//!                                               write failed ──► log fatal, keep defaults
//! ```
//!
//! Nothing escapes `init`: every failure is reported through the injected
//! [`EventLog`] and the store always ends up holding a usable configuration.
//! There is at most one read and at most one write, and no retries.
//!
//! # Ownership
//!
//! The store is constructed by the process entry point and handed to
//! consumers by reference.  There is no global instance.  `init` takes
//! `&mut self`, so overlapping calls on one store are rejected at compile
//! time; two *stores* pointed at the same file are not coordinated.

use std::sync::Arc;

use hunt_core::{
    decode_config, encode_config, Configuration, CustomPrice, Properties, RarityConfig,
    RewardsConfig, MAX_HUNT_AMOUNT,
};
use tracing::{debug, warn};

use crate::application::ports::{EventLog, FilePersistence, LogLevel};

/// Namespace directory holding the hunt config.
pub const CONFIG_NAMESPACE: &str = "hunt";
/// File name of the hunt config inside [`CONFIG_NAMESPACE`].
pub const CONFIG_FILENAME: &str = "config.json";

/// How the last [`ConfigStore::init`] call ended.
///
/// Informational only; `init` itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The file was read and adopted.  `clamped_from` holds the original
    /// `huntAmount` when it had to be lowered.
    Loaded { clamped_from: Option<i32> },
    /// No usable file; defaults were written.
    Generated,
    /// No usable file and the defaults could not be written.
    GeneratedUnsaved,
}

/// Holder of the live [`Configuration`].
pub struct ConfigStore {
    config: Configuration,
    persistence: Arc<dyn FilePersistence>,
    log: Arc<dyn EventLog>,
    namespace: String,
    filename: String,
    outcome: Option<InitOutcome>,
}

impl ConfigStore {
    /// Creates a store holding the default configuration, pointed at
    /// `hunt/config.json`.
    pub fn new(persistence: Arc<dyn FilePersistence>, log: Arc<dyn EventLog>) -> Self {
        Self::with_location(persistence, log, CONFIG_NAMESPACE, CONFIG_FILENAME)
    }

    /// Like [`ConfigStore::new`] but with a custom namespace and file name.
    pub fn with_location(
        persistence: Arc<dyn FilePersistence>,
        log: Arc<dyn EventLog>,
        namespace: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            config: Configuration::default(),
            persistence,
            log,
            namespace: namespace.into(),
            filename: filename.into(),
            outcome: None,
        }
    }

    /// Loads the persisted configuration, or writes the defaults if there is
    /// none.  See the module docs for the full sequence.
    pub async fn init(&mut self) {
        let outcome = match self.read_candidate().await {
            Some(candidate) => {
                let clamped_from = self.config.adopt(candidate);
                if let Some(requested) = clamped_from {
                    debug!(requested, "clamping huntAmount");
                    self.log.log(
                        LogLevel::Error,
                        &format!("Hunt amount can not be higher than {MAX_HUNT_AMOUNT}"),
                    );
                }
                self.log
                    .log(LogLevel::Info, "Hunt config file read successfully.");
                InitOutcome::Loaded { clamped_from }
            }
            None => {
                self.log.log(
                    LogLevel::Info,
                    &format!(
                        "No {} file found for Hunt. Attempting to generate one.",
                        self.filename
                    ),
                );
                self.write_current().await
            }
        };
        self.outcome = Some(outcome);
    }

    /// Reads and parses the file.  Any failure collapses to `None`.
    async fn read_candidate(&self) -> Option<Configuration> {
        let text = match self
            .persistence
            .read_file(&self.namespace, &self.filename)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "hunt config not readable");
                return None;
            }
        };

        match decode_config(&text) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                warn!(
                    namespace = %self.namespace,
                    filename = %self.filename,
                    error = %e,
                    "hunt config is malformed; it will be replaced with defaults"
                );
                None
            }
        }
    }

    /// Persists the in-memory configuration.  Failures are logged as fatal.
    async fn write_current(&self) -> InitOutcome {
        let written = match encode_config(&self.config) {
            Ok(text) => self
                .persistence
                .write_file(&self.namespace, &self.filename, &text)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match written {
            Ok(()) => InitOutcome::Generated,
            Err(reason) => {
                debug!(%reason, "hunt config write failed");
                self.log
                    .log(LogLevel::Fatal, "Could not write config for Hunt.");
                InitOutcome::GeneratedUnsaved
            }
        }
    }

    /// Result of the last `init`, or `None` if it has not run.
    pub fn outcome(&self) -> Option<InitOutcome> {
        self.outcome
    }

    /// The whole live configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn individual_hunts(&self) -> bool {
        self.config.individual_hunts
    }

    pub fn send_hunt_end_message(&self) -> bool {
        self.config.send_hunt_end_message
    }

    pub fn send_hunt_begin_message(&self) -> bool {
        self.config.send_hunt_begin_message
    }

    /// Hunt length in minutes.
    pub fn hunt_duration(&self) -> i32 {
        self.config.hunt_duration
    }

    /// Concurrent hunt count, never above [`MAX_HUNT_AMOUNT`] after a load.
    pub fn hunt_amount(&self) -> i32 {
        self.config.hunt_amount
    }

    pub fn rarity(&self) -> &RarityConfig {
        &self.config.rarity
    }

    pub fn rewards(&self) -> &RewardsConfig {
        &self.config.rewards
    }

    pub fn match_properties(&self) -> &Properties {
        &self.config.match_properties
    }

    pub fn custom_prices(&self) -> &[CustomPrice] {
        &self.config.custom_prices
    }

    pub fn blacklist(&self) -> &[String] {
        &self.config.blacklist
    }

    /// Case-insensitive blacklist lookup.
    pub fn blacklist_contains(&self, name: &str) -> bool {
        self.config.blacklist_contains(name)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockEventLog, MockFilePersistence, PersistenceError};
    use std::path::PathBuf;

    fn not_found() -> PersistenceError {
        PersistenceError::NotFound {
            path: PathBuf::from("hunt/config.json"),
        }
    }

    fn store(persistence: MockFilePersistence, log: MockEventLog) -> ConfigStore {
        ConfigStore::new(Arc::new(persistence), Arc::new(log))
    }

    fn expect_level(log: &mut MockEventLog, level: LogLevel, needle: &'static str) {
        log.expect_log()
            .withf(move |l, message| *l == level && message.contains(needle))
            .times(1)
            .return_const(());
    }

    #[test]
    fn test_new_store_holds_defaults_and_no_outcome() {
        let store = store(MockFilePersistence::new(), MockEventLog::new());

        assert_eq!(store.config(), &Configuration::default());
        assert_eq!(store.hunt_amount(), 7);
        assert_eq!(store.outcome(), None);
    }

    #[tokio::test]
    async fn test_init_loads_file_without_writing() {
        // Arrange
        let mut persistence = MockFilePersistence::new();
        persistence
            .expect_read_file()
            .times(1)
            .returning(|_, _| Ok(r#"{ "huntAmount": 12, "blacklist": ["Ditto"] }"#.to_string()));
        persistence.expect_write_file().never();

        let mut log = MockEventLog::new();
        expect_level(&mut log, LogLevel::Info, "read successfully");

        let mut store = store(persistence, log);

        // Act
        store.init().await;

        // Assert
        assert_eq!(store.hunt_amount(), 12);
        assert!(store.blacklist_contains("ditto"));
        assert_eq!(store.outcome(), Some(InitOutcome::Loaded { clamped_from: None }));
    }

    #[tokio::test]
    async fn test_init_clamps_hunt_amount_and_logs_error() {
        // Arrange
        let mut persistence = MockFilePersistence::new();
        persistence
            .expect_read_file()
            .times(1)
            .returning(|_, _| Ok(r#"{ "huntAmount": 50 }"#.to_string()));
        persistence.expect_write_file().never();

        let mut log = MockEventLog::new();
        expect_level(&mut log, LogLevel::Error, "higher than 28");
        expect_level(&mut log, LogLevel::Info, "read successfully");

        let mut store = store(persistence, log);

        // Act
        store.init().await;

        // Assert
        assert_eq!(store.hunt_amount(), 28);
        assert_eq!(
            store.outcome(),
            Some(InitOutcome::Loaded {
                clamped_from: Some(50)
            })
        );
    }

    #[tokio::test]
    async fn test_init_missing_file_writes_defaults_once() {
        // Arrange
        let mut persistence = MockFilePersistence::new();
        persistence
            .expect_read_file()
            .times(1)
            .returning(|_, _| Err(not_found()));
        persistence
            .expect_write_file()
            .withf(|_, _, content| {
                hunt_core::decode_config(content)
                    .map(|cfg| cfg == Configuration::default())
                    .unwrap_or(false)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut log = MockEventLog::new();
        expect_level(&mut log, LogLevel::Info, "Attempting to generate one");

        let mut store = store(persistence, log);

        // Act
        store.init().await;

        // Assert
        assert_eq!(store.config(), &Configuration::default());
        assert_eq!(store.outcome(), Some(InitOutcome::Generated));
    }

    #[tokio::test]
    async fn test_init_malformed_file_is_treated_as_missing() {
        let mut persistence = MockFilePersistence::new();
        persistence
            .expect_read_file()
            .times(1)
            .returning(|_, _| Ok("{ \"huntAmount\": ".to_string()));
        persistence
            .expect_write_file()
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut log = MockEventLog::new();
        expect_level(&mut log, LogLevel::Info, "No config.json file found");

        let mut store = store(persistence, log);
        store.init().await;

        assert_eq!(store.hunt_amount(), 7);
        assert_eq!(store.outcome(), Some(InitOutcome::Generated));
    }

    #[tokio::test]
    async fn test_init_write_failure_logs_fatal_and_keeps_defaults() {
        // Arrange
        let mut persistence = MockFilePersistence::new();
        persistence
            .expect_read_file()
            .times(1)
            .returning(|_, _| Err(not_found()));
        persistence.expect_write_file().times(1).returning(|_, _, _| {
            Err(PersistenceError::Io {
                path: PathBuf::from("hunt/config.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        });

        let mut log = MockEventLog::new();
        expect_level(&mut log, LogLevel::Info, "Attempting to generate one");
        expect_level(&mut log, LogLevel::Fatal, "Could not write config");

        let mut store = store(persistence, log);

        // Act
        store.init().await;

        // Assert
        assert_eq!(store.config(), &Configuration::default());
        assert_eq!(store.outcome(), Some(InitOutcome::GeneratedUnsaved));
    }

    #[tokio::test]
    async fn test_custom_location_is_passed_to_persistence() {
        let mut persistence = MockFilePersistence::new();
        persistence
            .expect_read_file()
            .withf(|namespace, filename| {
                namespace.to_string() == "events" && filename.to_string() == "hunt.json"
            })
            .times(1)
            .returning(|_, _| Ok("{}".to_string()));

        let mut log = MockEventLog::new();
        expect_level(&mut log, LogLevel::Info, "read successfully");

        let mut store =
            ConfigStore::with_location(Arc::new(persistence), Arc::new(log), "events", "hunt.json");
        store.init().await;

        assert_eq!(store.outcome(), Some(InitOutcome::Loaded { clamped_from: None }));
    }

    #[test]
    fn test_accessors_expose_live_values() {
        let store = store(MockFilePersistence::new(), MockEventLog::new());

        assert!(!store.individual_hunts());
        assert!(store.send_hunt_end_message());
        assert!(store.send_hunt_begin_message());
        assert_eq!(store.hunt_duration(), 60);
        assert_eq!(store.rarity(), &RarityConfig::default());
        assert_eq!(store.rewards(), &RewardsConfig::default());
        assert_eq!(store.match_properties(), &Properties::default());
        assert_eq!(store.custom_prices().len(), 1);
        assert!(store.blacklist().is_empty());
        assert!(!store.blacklist_contains("Pikachu"));
    }
}
