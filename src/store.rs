//! Store Module
//!
//! Owns the durable coffee collection.
//!
//! ## Responsibilities
//! - Load the full collection in durable (insertion) order
//! - Apply add/update/delete as whole-collection read-modify-write cycles
//! - Serialize mutations so no cycle can overwrite another's result
//!
//! ## Cost Profile
//! Every mutation decodes the whole collection, changes one thing and encodes
//! the whole collection again: O(n) per call. There is no append log. The
//! medium swaps the blob atomically, so a failed write leaves the previous
//! collection in place.

use std::path::Path;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::codec;
use crate::config::Config;
use crate::error::Result;
use crate::medium::{DurableMedium, FileMedium};
use crate::model::Coffee;

/// The coffee record store
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader
///
/// - **Mutations** (add/update/delete): Serialized by `write_lock`
///   - Only ONE read-modify-write cycle in flight at a time
///   - The lock is held from the read until the write has finished
///
/// - **Reads** (load_all/find): No write_lock needed
///   - The medium replaces its blob atomically, so readers see either the
///     collection before a mutation or after it
///
/// Calls are synchronous and run to completion once started; a caller that
/// stops waiting cannot leave a cycle half-applied.
///
/// One store per slot. Two stores pointed at the same slot do not coordinate.
pub struct CoffeeStore<M = FileMedium> {
    /// Where the encoded collection lives
    medium: M,

    /// Write indented JSON
    pretty_print: bool,

    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl CoffeeStore<FileMedium> {
    /// Open or create a file-backed store with the given config
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let slot_path = config.slot_path();
        let medium = FileMedium::open(&slot_path, config.sync_strategy)?;

        info!(slot = %slot_path.display(), "Coffee store opened");

        Ok(Self::with_medium(medium).with_pretty_print(config.pretty_print))
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }
}

impl<M: DurableMedium> CoffeeStore<M> {
    /// Build a store over any medium
    pub fn with_medium(medium: M) -> Self {
        Self {
            medium,
            pretty_print: false,
            write_lock: Mutex::new(()),
        }
    }

    /// Toggle indented JSON for subsequent writes
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Load the full collection in durable order
    ///
    /// Never fails: an unreadable medium or undecodable content both come
    /// back as an empty collection.
    pub fn load_all(&self) -> Vec<Coffee> {
        match self.medium.read() {
            Ok(Some(text)) => codec::decode(&text),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Coffee slot unreadable, returning empty collection");
                Vec::new()
            }
        }
    }

    /// Find the first record with the given id
    pub fn find(&self, id: &str) -> Option<Coffee> {
        self.load_all().into_iter().find(|c| c.id == id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a record and persist the collection
    ///
    /// Ids are not checked: adding a record whose id already exists stores
    /// a duplicate. Callers own id uniqueness.
    pub fn add(&self, coffee: Coffee) -> Result<()> {
        let id = coffee.id.clone();
        let len = self.mutate(|records| {
            records.push(coffee);
            records.len()
        })?;

        debug!(id = %id, len, "Coffee added");
        Ok(())
    }

    /// Replace the first record whose id matches, keeping its position
    ///
    /// Returns whether a record was replaced. With no match the collection
    /// is written back unchanged.
    pub fn update(&self, coffee: Coffee) -> Result<bool> {
        let id = coffee.id.clone();
        let replaced = self.mutate(|records| {
            match records.iter_mut().find(|c| c.id == coffee.id) {
                Some(slot) => {
                    *slot = coffee;
                    true
                }
                None => false,
            }
        })?;

        debug!(id = %id, replaced, "Coffee update applied");
        Ok(replaced)
    }

    /// Remove every record with the given id
    ///
    /// Returns how many were removed; zero is not an error.
    pub fn delete(&self, id: &str) -> Result<usize> {
        let removed = self.mutate(|records| {
            let before = records.len();
            records.retain(|c| c.id != id);
            before - records.len()
        })?;

        debug!(id = %id, removed, "Coffee delete applied");
        Ok(removed)
    }

    /// Get the underlying medium
    pub fn medium(&self) -> &M {
        &self.medium
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// One read-modify-write cycle under the write lock
    fn mutate<T>(&self, apply: impl FnOnce(&mut Vec<Coffee>) -> T) -> Result<T> {
        let _write_guard = self.write_lock.lock();

        let mut records = self.read_for_write()?;
        let outcome = apply(&mut records);
        self.persist(&records)?;

        Ok(outcome)
    }

    /// Read step of a cycle
    ///
    /// Unlike `load_all`, an I/O failure aborts the cycle so the write
    /// cannot clobber a collection that was never read. Undecodable content
    /// still recovers to empty.
    fn read_for_write(&self) -> Result<Vec<Coffee>> {
        Ok(match self.medium.read()? {
            Some(text) => codec::decode(&text),
            None => Vec::new(),
        })
    }

    fn persist(&self, records: &[Coffee]) -> Result<()> {
        let text = codec::encode_with(records, self.pretty_print)?;
        self.medium.write(&text)
    }
}
