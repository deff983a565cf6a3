use super::{sorted_entries, RecordStore};
use crate::error::{FecesError, Result};
use crate::model::{PloppedFile, Record};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store over a single JSON index document.
pub struct FileStore {
    index_file: PathBuf,
}

impl FileStore {
    pub fn new(index_file: PathBuf) -> Self {
        Self { index_file }
    }

    pub fn index_file(&self) -> &Path {
        &self.index_file
    }

    fn load_index(&self) -> Result<HashMap<String, Record>> {
        if !self.index_file.exists() {
            return Err(FecesError::StoreMissing(self.index_file.clone()));
        }
        let content = fs::read_to_string(&self.index_file).map_err(FecesError::Io)?;
        serde_json::from_str(&content).map_err(|source| FecesError::StoreCorrupt {
            path: self.index_file.clone(),
            source,
        })
    }

    fn save_index(&self, index: &HashMap<String, Record>) -> Result<()> {
        let content = serde_json::to_string_pretty(index).map_err(FecesError::Serialization)?;
        fs::write(&self.index_file, content).map_err(FecesError::Io)?;
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn get(&self, id: &str) -> Result<Option<Record>> {
        let mut index = self.load_index()?;
        Ok(index.remove(id))
    }

    fn put(&mut self, id: &str, record: &Record) -> Result<()> {
        let mut index = self.load_index()?;
        index.insert(id.to_string(), record.clone());
        self.save_index(&index)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let mut index = self.load_index()?;
        if index.remove(id).is_none() {
            return Err(FecesError::RecordNotFound(id.to_string()));
        }
        self.save_index(&index)
    }

    fn all(&self) -> Result<Vec<PloppedFile>> {
        let index = self.load_index()?;
        Ok(sorted_entries(index))
    }
}
