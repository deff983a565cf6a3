use crate::commands::{CmdMessage, CmdResult, FecesPaths};
use crate::duration::parse_duration;
use crate::error::{FecesError, Result};
use crate::model::PloppedFile;
use crate::store::RecordStore;
use chrono::Utc;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What a compost run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompostOutcome {
    /// No record was old enough; the confirmation callback was never invoked.
    NoneEligible,
    /// The caller declined; nothing was touched.
    Aborted,
    /// Eligible records were processed, with any failures reported per record.
    Purged {
        count: usize,
        failures: Vec<CompostFailure>,
    },
}

/// A record that could not be composted, with the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompostFailure {
    pub id: String,
    pub reason: String,
}

pub fn run<S, F>(store: &mut S, paths: &FecesPaths, duration: &str, confirm: F) -> Result<CmdResult>
where
    S: RecordStore,
    F: FnOnce(&[PloppedFile]) -> bool,
{
    paths.ensure_initialized()?;

    // 1. Validate the duration before the store is read at all
    let offset = parse_duration(duration)?;
    let cutoff = Utc::now().timestamp_millis().saturating_sub(offset);

    // 2. Select what is old enough
    let eligible: Vec<PloppedFile> = store
        .all()?
        .into_iter()
        .filter(|f| f.record.timestamp < cutoff)
        .collect();

    if eligible.is_empty() {
        let mut result = CmdResult::default().with_outcome(CompostOutcome::NoneEligible);
        result.add_message(CmdMessage::warning("No files to compost."));
        return Ok(result);
    }

    // 3. Hand the eligible set to the caller for display and consent
    if !confirm(&eligible) {
        let mut result = CmdResult::default().with_outcome(CompostOutcome::Aborted);
        result.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(result);
    }

    // 4. Best-effort deletion; one bad record must not strand the rest
    let mut removed = Vec::new();
    let mut failures = Vec::new();
    for file in eligible {
        match compost_one(store, &file) {
            Ok(()) => removed.push(file),
            Err(e) => failures.push(CompostFailure {
                id: file.id.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let count = removed.len();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Composted {} file(s).",
        count
    )));
    for failure in &failures {
        result.add_message(CmdMessage::error(format!(
            "Failed to compost '{}': {}",
            failure.id, failure.reason
        )));
    }
    Ok(result
        .with_affected(removed)
        .with_outcome(CompostOutcome::Purged { count, failures }))
}

fn compost_one<S: RecordStore>(store: &mut S, file: &PloppedFile) -> Result<()> {
    // Record first: a failed file removal leaves an orphan file in the
    // holding area, never a record pointing at nothing
    store.delete(&file.id)?;
    remove_entry(&file.record.trashed_path)
}

/// Recursive delete. A missing entry counts as already gone so a dangling
/// record can still be cleared from the index.
fn remove_entry(path: &Path) -> Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FecesError::Io(e)),
    };
    if meta.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}
