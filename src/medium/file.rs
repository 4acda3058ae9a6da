//! File-backed slot
//!
//! The blob lives in a single file. Writes land in a sibling temp file that
//! is renamed over the slot, so the slot file always holds a complete blob.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::config::SyncStrategy;
use crate::error::{BrewError, Result};

use super::DurableMedium;

/// Slot stored as one file on disk
#[derive(Debug)]
pub struct FileMedium {
    /// Final location of the blob
    path: PathBuf,

    /// Whether to fsync the temp file before the rename
    sync_strategy: SyncStrategy,
}

impl FileMedium {
    /// Create a medium for the given file, creating its directory if needed
    pub fn open(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Result<Self> {
        let path = path.into();
        let parent = Self::parent_of(&path)?;
        fs::create_dir_all(parent)?;

        Ok(Self {
            path,
            sync_strategy,
        })
    }

    /// Get the slot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn parent_of(path: &Path) -> Result<&Path> {
        path.parent().ok_or_else(|| {
            BrewError::Storage(format!("Slot path has no parent: {}", path.display()))
        })
    }

    /// ".coffees_list.json-<uuid>.tmp" next to the slot file
    fn temp_path(&self) -> Result<PathBuf> {
        let parent = Self::parent_of(&self.path)?;
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(parent.join(format!(".{}-{}.tmp", name, Uuid::new_v4())))
    }

    fn write_temp(&self, tmp: &Path, text: &str) -> Result<()> {
        let mut file = File::create(tmp)?;
        file.write_all(text.as_bytes())?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }
        Ok(())
    }
}

impl DurableMedium for FileMedium {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, text: &str) -> Result<()> {
        let tmp = self.temp_path()?;

        let result = self
            .write_temp(&tmp, text)
            .and_then(|_| fs::rename(&tmp, &self.path).map_err(BrewError::from));

        if result.is_err() {
            // Leave no stray temp file behind; the slot itself is untouched
            let _ = fs::remove_file(&tmp);
        } else {
            debug!(path = %self.path.display(), bytes = text.len(), "Slot replaced");
        }

        result
    }
}
