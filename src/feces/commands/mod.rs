use crate::error::{FecesError, Result};
use crate::model::PloppedFile;
use std::fs;
use std::path::{Path, PathBuf};

pub mod compost;
pub mod init;
pub mod pie;
pub mod plop;
pub mod plunge;

use compost::CompostOutcome;

const INDEX_FILE: &str = "index.json";
const FILES_DIR: &str = "files";

/// Locations of the feces environment, anchored at an injected root so the
/// caller (and tests) decide where it lives.
#[derive(Debug, Clone)]
pub struct FecesPaths {
    root: PathBuf,
}

impl FecesPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_file(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    pub fn files_dir(&self) -> PathBuf {
        self.root.join(FILES_DIR)
    }

    /// Holding-area location for a record id.
    pub fn trashed_file(&self, id: &str) -> PathBuf {
        self.files_dir().join(id)
    }

    /// Every operation except init requires the index document to exist and
    /// be writable.
    pub fn ensure_initialized(&self) -> Result<()> {
        match fs::metadata(self.index_file()) {
            Ok(meta) if !meta.permissions().readonly() => Ok(()),
            _ => Err(FecesError::NotInitialized),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<PloppedFile>,
    pub listed: Vec<PloppedFile>,
    pub outcome: Option<CompostOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, files: Vec<PloppedFile>) -> Self {
        self.affected = files;
        self
    }

    pub fn with_listed(mut self, files: Vec<PloppedFile>) -> Self {
        self.listed = files;
        self
    }

    pub fn with_outcome(mut self, outcome: CompostOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }
}
