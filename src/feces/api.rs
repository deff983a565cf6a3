//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single entry
//! point for every feces operation regardless of the UI driving it.
//!
//! It dispatches to the right command function and returns structured
//! `CmdResult` values. It does no business logic (that lives in
//! `commands/*.rs`), no stdout/stderr, and no presentation.
//!
//! `FecesApi<S: RecordStore>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`. The environment
//! root arrives as an injected `FecesPaths`, never resolved in here, which is
//! what lets the whole library run against a temporary directory.

use crate::commands;
use crate::error::Result;
use crate::model::PloppedFile;
use crate::store::RecordStore;
use std::path::Path;

/// The main entry point for feces operations.
///
/// Generic over `RecordStore` to allow different storage backends.
pub struct FecesApi<S: RecordStore> {
    store: S,
    paths: commands::FecesPaths,
}

impl<S: RecordStore> FecesApi<S> {
    pub fn new(store: S, paths: commands::FecesPaths) -> Self {
        Self { store, paths }
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn plop(&mut self, cwd: &Path, file: &Path) -> Result<commands::CmdResult> {
        commands::plop::run(&mut self.store, &self.paths, cwd, file)
    }

    pub fn plunge(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::plunge::run(&mut self.store, &self.paths, id)
    }

    pub fn pie(&self) -> Result<commands::CmdResult> {
        commands::pie::run(&self.store, &self.paths)
    }

    pub fn compost<F>(&mut self, duration: &str, confirm: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&[PloppedFile]) -> bool,
    {
        commands::compost::run(&mut self.store, &self.paths, duration, confirm)
    }

    pub fn paths(&self) -> &commands::FecesPaths {
        &self.paths
    }
}

pub use crate::commands::compost::{CompostFailure, CompostOutcome};
pub use crate::commands::{CmdMessage, CmdResult, FecesPaths, MessageLevel};
