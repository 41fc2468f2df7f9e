use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::model::GigSnapshot;

/// JSON file holding every captured snapshot as one array, oldest first.
///
/// Each append rewrites the whole file. There is no locking: two processes
/// appending to the same file can lose an update.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored snapshots in capture order. Entries that no longer decode as a
    /// snapshot are skipped.
    pub fn load(&self) -> Result<Vec<GigSnapshot>> {
        let entries = self.read_entries()?;
        let total = entries.len();
        let snapshots: Vec<GigSnapshot> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(s) => Some(s),
                Err(e) => {
                    warn!("Skipping store entry {} in {:?}: {}", i, self.path, e);
                    None
                }
            })
            .collect();
        info!("Loaded {}/{} snapshots from {:?}", snapshots.len(), total, self.path);
        Ok(snapshots)
    }

    /// Append `snapshot` and rewrite the file. Returns the new entry count.
    ///
    /// An unreadable store (bad JSON, not an array) is treated as empty and
    /// gets overwritten, losing whatever it held.
    pub fn append(&self, snapshot: &GigSnapshot) -> Result<usize> {
        let mut entries = self.read_entries()?;
        entries.push(serde_json::to_value(snapshot)?);

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create store directory {:?}", dir))?;
        }

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write store {:?}", self.path))?;

        info!("Appended snapshot to {:?} ({} total)", self.path, entries.len());
        Ok(entries.len())
    }

    /// Raw array entries. Missing file or unparseable content yields an empty
    /// list; other I/O errors propagate.
    fn read_entries(&self) -> Result<Vec<Value>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read store {:?}", self.path))
            }
        };

        match serde_json::from_slice::<Vec<Value>>(&bytes) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    "Store {:?} is not a JSON array ({}), starting from empty",
                    self.path, e
                );
                Ok(Vec::new())
            }
        }
    }
}

// ── Tests ──
