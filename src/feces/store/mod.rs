//! # Storage Layer
//!
//! The [`RecordStore`] trait abstracts the index of trashed files so the
//! command layer can run against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage over a single `index.json`
//!   document, rewritten whole on every mutation
//! - [`memory::InMemoryStore`]: HashMap-backed storage for tests
//!
//! ## Document format
//!
//! ```text
//! {
//!   "1717171717171-notes.txt": {
//!     "originalPath": "/home/u/notes.txt",
//!     "trashedPath": "/home/u/.feces/files/1717171717171-notes.txt",
//!     "timestamp": 1717171717171
//!   }
//! }
//! ```
//!
//! Every mutating call performs a full read-modify-write of the document;
//! there is no partial-write protocol, so a crash mid-write can leave it
//! corrupt. Reads of a corrupt document fail with `StoreCorrupt`, reads of a
//! missing one with `StoreMissing`.

use crate::error::Result;
use crate::model::{PloppedFile, Record};
use std::collections::HashMap;

pub mod fs;
pub mod memory;

/// Abstract interface over the trash index.
pub trait RecordStore {
    /// Get a record by id
    fn get(&self, id: &str) -> Result<Option<Record>>;

    /// Insert or overwrite a record and persist
    fn put(&mut self, id: &str, record: &Record) -> Result<()>;

    /// Remove a record and persist; an absent id is an error
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Every (id, record) pair, oldest first
    fn all(&self) -> Result<Vec<PloppedFile>>;
}

/// Orders index entries oldest first (timestamp, then id as a tiebreak).
/// Ids embed the millisecond clock, so this matches trash order.
pub(crate) fn sorted_entries(index: HashMap<String, Record>) -> Vec<PloppedFile> {
    let mut entries: Vec<PloppedFile> = index
        .into_iter()
        .map(|(id, record)| PloppedFile { id, record })
        .collect();
    entries.sort_by(|a, b| {
        (a.record.timestamp, a.id.as_str()).cmp(&(b.record.timestamp, b.id.as_str()))
    });
    entries
}
