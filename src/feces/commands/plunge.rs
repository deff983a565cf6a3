use crate::commands::{CmdMessage, CmdResult, FecesPaths};
use crate::error::{FecesError, Result};
use crate::model::PloppedFile;
use crate::relocate;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S, paths: &FecesPaths, id: &str) -> Result<CmdResult> {
    paths.ensure_initialized()?;

    let record = store
        .get(id)?
        .ok_or_else(|| FecesError::RecordNotFound(id.to_string()))?;

    // A failed move must keep the record; the index only reflects reality
    relocate::move_entry(&record.trashed_path, &record.original_path)?;
    store.delete(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File '{}' plunged successfully to '{}'.",
        id,
        record.original_path.display()
    )));
    Ok(result.with_affected(vec![PloppedFile::new(id, record)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{init, plop};
    use crate::store::fs::FileStore;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn init_env(tmp: &TempDir) -> (FileStore, FecesPaths) {
        let paths = FecesPaths::new(tmp.path().join(".feces"));
        init::run(&paths).unwrap();
        let store = FileStore::new(paths.index_file());
        (store, paths)
    }

    #[test]
    fn plunges_a_plopped_file_back() {
        let tmp = TempDir::new().unwrap();
        let (mut store, paths) = init_env(&tmp);
        let original = tmp.path().join("notes.txt");
        fs::write(&original, "remember").unwrap();

        let plopped = plop::run(&mut store, &paths, tmp.path(), Path::new("notes.txt"))
            .unwrap()
            .affected
            .remove(0);
        assert!(!original.exists());

        let result = run(&mut store, &paths, &plopped.id).unwrap();

        assert_eq!(result.affected[0].record.original_path, original);
        assert_eq!(fs::read_to_string(&original).unwrap(), "remember");
        assert!(!plopped.record.trashed_path.exists());
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn unknown_id_is_record_not_found() {
        let tmp = TempDir::new().unwrap();
        let (mut store, paths) = init_env(&tmp);

        assert!(matches!(
            run(&mut store, &paths, "12345-ghost.txt"),
            Err(FecesError::RecordNotFound(_))
        ));
    }

    #[test]
    fn failed_move_keeps_the_record() {
        let tmp = TempDir::new().unwrap();
        let (mut store, paths) = init_env(&tmp);
        let original = tmp.path().join("notes.txt");
        fs::write(&original, "remember").unwrap();
        let plopped = plop::run(&mut store, &paths, tmp.path(), Path::new("notes.txt"))
            .unwrap()
            .affected
            .remove(0);

        // Sabotage the holding area entry so the move has nothing to restore
        fs::remove_file(&plopped.record.trashed_path).unwrap();

        let err = run(&mut store, &paths, &plopped.id).unwrap_err();

        assert!(matches!(err, FecesError::Relocation { .. }));
        assert_eq!(
            store.get(&plopped.id).unwrap(),
            Some(plopped.record.clone())
        );
    }

    #[test]
    fn requires_an_initialized_environment() {
        let tmp = TempDir::new().unwrap();
        let paths = FecesPaths::new(tmp.path().join(".feces"));
        let mut store = FileStore::new(paths.index_file());

        assert!(matches!(
            run(&mut store, &paths, "1-x"),
            Err(FecesError::NotInitialized)
        ));
    }
}
