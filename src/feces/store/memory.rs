use super::{sorted_entries, RecordStore};
use crate::error::{FecesError, Result};
use crate::model::{PloppedFile, Record};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: HashMap<String, Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn get(&self, id: &str) -> Result<Option<Record>> {
        Ok(self.records.get(id).cloned())
    }

    fn put(&mut self, id: &str, record: &Record) -> Result<()> {
        self.records.insert(id.to_string(), record.clone());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        if self.records.remove(id).is_none() {
            return Err(FecesError::RecordNotFound(id.to_string()));
        }
        Ok(())
    }

    fn all(&self) -> Result<Vec<PloppedFile>> {
        Ok(sorted_entries(self.records.clone()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::path::Path;

    /// Test store builder that keeps holding-area files and records in step.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds a record stamped `age_ms` in the past whose trashed file
        /// really exists under `files_dir`.
        pub fn with_plopped(mut self, files_dir: &Path, name: &str, age_ms: i64) -> Self {
            let timestamp = chrono::Utc::now().timestamp_millis() - age_ms;
            let id = format!("{timestamp}-{name}");
            let trashed_path = files_dir.join(&id);
            std::fs::write(&trashed_path, format!("contents of {name}")).unwrap();

            let original_dir = files_dir.parent().unwrap_or(files_dir);
            let record = Record::new(original_dir.join(name), trashed_path, timestamp);
            self.store.put(&id, &record).unwrap();
            self
        }
    }
}
