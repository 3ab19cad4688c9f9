//! JSON-file-backed accessory registry
//!
//! Stands in for the host runtime's persistence: the file is the durable
//! source of truth for registered accessories across restarts. Every
//! mutation is written through immediately, via a temp file and rename so a
//! crash mid-write cannot corrupt the cache.

use std::path::{Path, PathBuf};

use airbridge_core::prelude::*;
use airbridge_platform::{AccessoryRecord, AccessoryRegistry};

/// Default accessory cache location under the local data directory.
pub fn default_cache_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("airbridge").join("accessories.json")
}

/// Accessory registry persisted as a JSON array of records.
#[derive(Debug)]
pub struct FileRegistry {
    path: PathBuf,
    records: Vec<AccessoryRecord>,
}

impl FileRegistry {
    /// Open a registry file. A missing file yields an empty registry; an
    /// unreadable one is an error rather than a silent wipe.
    pub fn open(path: &Path) -> Result<Self> {
        let records = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|e| {
                Error::registry(format!("unreadable accessory cache {}: {e}", path.display()))
            })?
        } else {
            Vec::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Records restored from disk, in persisted order.
    pub fn records(&self) -> &[AccessoryRecord] {
        &self.records
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.records)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl AccessoryRegistry for FileRegistry {
    fn register(&mut self, records: &[AccessoryRecord]) -> Result<()> {
        self.records.extend_from_slice(records);
        self.persist()
    }

    fn unregister(&mut self, records: &[AccessoryRecord]) -> Result<()> {
        self.records
            .retain(|kept| !records.iter().any(|dead| dead.identity == kept.identity));
        self.persist()
    }

    fn update(&mut self, records: &[AccessoryRecord]) -> Result<()> {
        for updated in records {
            match self
                .records
                .iter_mut()
                .find(|kept| kept.identity == updated.identity)
            {
                Some(existing) => *existing = updated.clone(),
                None => warn!(
                    "update for accessory not in cache: {}",
                    updated.display_name
                ),
            }
        }
        self.persist()
    }
}
