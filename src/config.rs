//! Configuration for Brewlog
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{BrewError, Result};

/// Main configuration for a Brewlog store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all data files
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {store_name}/
    ///           └── {slot_key}.json   (the whole collection)
    pub data_dir: PathBuf,

    /// Name of the store directory inside `data_dir`
    pub store_name: String,

    /// Name of the single slot holding the encoded collection
    pub slot_key: String,

    // -------------------------------------------------------------------------
    // Encoding Configuration
    // -------------------------------------------------------------------------
    /// Write indented JSON (human-readable on disk)
    pub pretty_print: bool,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// Whether to fsync before the atomic rename
    pub sync_strategy: SyncStrategy,
}

/// Sync strategy for slot writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync the temp file before renaming it over the slot (safest, slowest)
    EveryWrite,

    /// Leave flushing to the OS
    Never,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./brewlog_data"),
            store_name: "coffee_data".to_string(),
            slot_key: "coffees_list".to_string(),
            pretty_print: true,
            sync_strategy: SyncStrategy::EveryWrite,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Path of the file backing the slot
    pub fn slot_path(&self) -> PathBuf {
        self.data_dir
            .join(&self.store_name)
            .join(format!("{}.json", self.slot_key))
    }

    /// Check that names are usable as single path components
    pub fn validate(&self) -> Result<()> {
        validate_component("store_name", &self.store_name)?;
        validate_component("slot_key", &self.slot_key)
    }
}

fn validate_component(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BrewError::Config(format!("{} must not be empty", field)));
    }
    if value.contains(|c| c == '/' || c == '\\') || value == "." || value == ".." {
        return Err(BrewError::Config(format!(
            "{} must be a plain name, got {:?}",
            field, value
        )));
    }
    Ok(())
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all storage)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the store directory name
    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.config.store_name = name.into();
        self
    }

    /// Set the slot key
    pub fn slot_key(mut self, key: impl Into<String>) -> Self {
        self.config.slot_key = key.into();
        self
    }

    /// Toggle indented JSON output
    pub fn pretty_print(mut self, pretty: bool) -> Self {
        self.config.pretty_print = pretty;
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
