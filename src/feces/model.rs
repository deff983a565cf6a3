use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One trashed file. The record id is the index key, not part of the
/// serialized body; field names match the on-disk document exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub original_path: PathBuf,
    pub trashed_path: PathBuf,
    pub timestamp: i64,
}

impl Record {
    pub fn new(original_path: PathBuf, trashed_path: PathBuf, timestamp: i64) -> Self {
        Self {
            original_path,
            trashed_path,
            timestamp,
        }
    }

    /// The moment of trashing, if the stored millisecond timestamp is in range.
    pub fn plopped_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// A record paired with its id, as surfaced to callers and listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PloppedFile {
    pub id: String,
    pub record: Record,
}

impl PloppedFile {
    pub fn new(id: impl Into<String>, record: Record) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }
}
