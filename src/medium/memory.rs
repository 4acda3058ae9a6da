//! In-memory slot

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::error::{BrewError, Result};

use super::DurableMedium;

/// Slot held in process memory
///
/// Lost on drop. Can be switched to refuse writes, which stands in for a
/// full disk or revoked permissions.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    blob: RwLock<Option<String>>,
    read_only: AtomicBool,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given blob already saved
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            blob: RwLock::new(Some(text.into())),
            read_only: AtomicBool::new(false),
        }
    }

    /// Make subsequent writes fail with `PermissionDenied`
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Overwrite the blob directly, bypassing the read-only switch
    pub fn corrupt(&self, text: impl Into<String>) {
        *self.blob.write() = Some(text.into());
    }

    /// Current blob
    pub fn contents(&self) -> Option<String> {
        self.blob.read().clone()
    }
}

impl DurableMedium for MemoryMedium {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.read().clone())
    }

    fn write(&self, text: &str) -> Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(BrewError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "memory slot is read-only",
            )));
        }
        *self.blob.write() = Some(text.to_string());
        Ok(())
    }
}
