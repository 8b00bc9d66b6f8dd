//! Bounded, newest-first lead storage.
//!
//! The vault is the only durable state the funnel owns. Lead capture is
//! the sole writer; the admin viewer only reads. The store sits behind a
//! small trait so the funnel core never touches the storage medium
//! directly and tests can run against memory.

use anyhow::{Context, Result};
use audit_core::types::LeadRecord;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const DEFAULT_CAPACITY: usize = 100;

pub trait LeadStore: Send + Sync {
    /// All records, newest first.
    fn list(&self) -> Result<Vec<LeadRecord>>;
    /// Prepends a record, evicting the oldest past capacity.
    fn append(&self, record: LeadRecord) -> Result<()>;
    fn is_empty(&self) -> bool {
        self.list().map(|records| records.is_empty()).unwrap_or(true)
    }
}

/// JSON file vault. A missing file reads as empty; writes go through a
/// temp file and rename so a concurrent reader never sees a torn list.
pub struct JsonFileVault {
    path: PathBuf,
    capacity: usize,
}

impl JsonFileVault {
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity: capacity.max(1),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeadStore for JsonFileVault {
    fn list(&self) -> Result<Vec<LeadRecord>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading lead vault {}", self.path.display()))
            }
        };
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing lead vault {}", self.path.display()))
    }

    fn append(&self, record: LeadRecord) -> Result<()> {
        let mut records = self.list()?;
        records.insert(0, record);
        records.truncate(self.capacity);
        let data = serde_json::to_string_pretty(&records)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating vault dir {}", parent.display()))?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, data)
            .with_context(|| format!("writing lead vault {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing lead vault {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory vault, used when no path is configured and in tests.
pub struct MemoryVault {
    records: Mutex<Vec<LeadRecord>>,
    capacity: usize,
}

impl MemoryVault {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }
}

impl Default for MemoryVault {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl LeadStore for MemoryVault {
    fn list(&self) -> Result<Vec<LeadRecord>> {
        Ok(self.records.lock().expect("vault lock poisoned").clone())
    }

    fn append(&self, record: LeadRecord) -> Result<()> {
        let mut records = self.records.lock().expect("vault lock poisoned");
        records.insert(0, record);
        records.truncate(self.capacity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_core::types::Tier;

    fn record(email: &str, score: u8) -> LeadRecord {
        LeadRecord {
            email: email.to_string(),
            score,
            tier: Tier::from_percentage(score),
            timestamp: "2026-02-01 10:00:00".to_string(),
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vault = JsonFileVault::new(dir.path().join("leads.json"), DEFAULT_CAPACITY);
        assert!(vault.list().expect("list").is_empty());
        assert!(vault.is_empty());
    }

    #[test]
    fn append_prepends_newest_first() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vault = JsonFileVault::new(dir.path().join("leads.json"), DEFAULT_CAPACITY);
        vault.append(record("first@corp.com", 10)).expect("append");
        vault.append(record("second@corp.com", 90)).expect("append");
        let records = vault.list().expect("list");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].email, "second@corp.com");
        assert_eq!(records[1].email, "first@corp.com");
        assert!(!vault.is_empty());
    }

    #[test]
    fn capacity_evicts_oldest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vault = JsonFileVault::new(dir.path().join("leads.json"), 3);
        for i in 0..4 {
            vault
                .append(record(&format!("lead{i}@corp.com"), 50))
                .expect("append");
        }
        let records = vault.list().expect("list");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].email, "lead3@corp.com");
        assert_eq!(records[2].email, "lead1@corp.com");
    }

    #[test]
    fn hundred_record_cap_holds_on_the_101st_capture() {
        let vault = MemoryVault::new(DEFAULT_CAPACITY);
        for i in 0..101 {
            vault
                .append(record(&format!("lead{i}@corp.com"), 50))
                .expect("append");
        }
        let records = vault.list().expect("list");
        assert_eq!(records.len(), 100);
        assert_eq!(records[0].email, "lead100@corp.com");
        assert_eq!(records[99].email, "lead1@corp.com");
    }

    #[test]
    fn file_vault_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vault = JsonFileVault::new(dir.path().join("nested/vault/leads.json"), 10);
        vault.append(record("lead@corp.com", 70)).expect("append");
        assert_eq!(vault.list().expect("list").len(), 1);
    }

    #[test]
    fn corrupt_file_reports_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("leads.json");
        fs::write(&path, "not json").expect("write");
        let vault = JsonFileVault::new(&path, 10);
        assert!(vault.list().is_err());
        // is_empty treats an unreadable vault as empty rather than failing.
        assert!(vault.is_empty());
    }
}
