//! Durable Medium Module
//!
//! A single named slot holding one text blob: the encoded collection.
//!
//! ## Contract
//! - `read` returns `Ok(None)` when the slot has never been written.
//! - `write` replaces the whole blob atomically. A concurrent `read` sees the
//!   previous text or the new text, never a mix.
//! - The medium knows nothing about records; it stores opaque text.
//!
//! ## Implementations
//! - [`FileMedium`]: one JSON file, replaced via temp file + rename
//! - [`MemoryMedium`]: in-process slot for tests and ephemeral stores

mod file;
mod memory;

pub use file::FileMedium;
pub use memory::MemoryMedium;

use crate::error::Result;

/// Raw storage for the encoded collection
pub trait DurableMedium: Send + Sync {
    /// Read the current blob, `None` if nothing was ever saved
    fn read(&self) -> Result<Option<String>>;

    /// Atomically replace the blob
    fn write(&self, text: &str) -> Result<()>;
}

impl<M: DurableMedium + ?Sized> DurableMedium for std::sync::Arc<M> {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}
