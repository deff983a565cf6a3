use crate::commands::{CmdMessage, CmdResult, FecesPaths};
use crate::error::{FecesError, Result};
use crate::model::{PloppedFile, Record};
use crate::relocate;
use crate::store::RecordStore;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run<S: RecordStore>(
    store: &mut S,
    paths: &FecesPaths,
    cwd: &Path,
    file: &Path,
) -> Result<CmdResult> {
    paths.ensure_initialized()?;

    // 1. Resolve against the invocation directory
    let original_path = resolve(cwd, file);
    ensure_accessible(&original_path)?;

    // 2. One clock read feeds both the id and the record
    let timestamp = Utc::now().timestamp_millis();
    let basename = original_path
        .file_name()
        .ok_or_else(|| FecesError::Access(original_path.clone()))?;
    let id = format!("{}-{}", timestamp, basename.to_string_lossy());
    let trashed_path = paths.trashed_file(&id);

    // 3. Move before recording; a failed move leaves the store untouched
    relocate::move_entry(&original_path, &trashed_path)?;

    let plopped = PloppedFile::new(id, Record::new(original_path, trashed_path, timestamp));
    store.put(&plopped.id, &plopped.record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File '{}' plopped successfully.",
        plopped.record.original_path.display()
    )));
    Ok(result.with_affected(vec![plopped]))
}

fn resolve(cwd: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        cwd.join(file)
    }
}

fn ensure_accessible(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if !meta.permissions().readonly() => Ok(()),
        _ => Err(FecesError::Access(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;
    use crate::store::fs::FileStore;
    use tempfile::TempDir;

    fn init_env(tmp: &TempDir) -> (FileStore, FecesPaths) {
        let paths = FecesPaths::new(tmp.path().join(".feces"));
        init::run(&paths).unwrap();
        let store = FileStore::new(paths.index_file());
        (store, paths)
    }

    #[test]
    fn moves_the_file_and_records_it() {
        let tmp = TempDir::new().unwrap();
        let (mut store, paths) = init_env(&tmp);
        let cwd = tmp.path().join("work");
        fs::create_dir(&cwd).unwrap();
        fs::write(cwd.join("notes.txt"), "remember").unwrap();

        let result = run(&mut store, &paths, &cwd, Path::new("notes.txt")).unwrap();

        let plopped = &result.affected[0];
        assert_eq!(plopped.record.original_path, cwd.join("notes.txt"));
        assert!(plopped.id.ends_with("-notes.txt"));
        assert!(!cwd.join("notes.txt").exists());
        assert_eq!(
            fs::read_to_string(&plopped.record.trashed_path).unwrap(),
            "remember"
        );
        assert_eq!(
            store.get(&plopped.id).unwrap(),
            Some(plopped.record.clone())
        );
    }

    #[test]
    fn accepts_absolute_paths() {
        let tmp = TempDir::new().unwrap();
        let (mut store, paths) = init_env(&tmp);
        let target = tmp.path().join("abs.txt");
        fs::write(&target, "x").unwrap();

        let result = run(&mut store, &paths, Path::new("/irrelevant"), &target).unwrap();

        assert_eq!(result.affected[0].record.original_path, target);
        assert!(!target.exists());
    }

    #[test]
    fn plops_directories_too() {
        let tmp = TempDir::new().unwrap();
        let (mut store, paths) = init_env(&tmp);
        let dir = tmp.path().join("bundle");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inner.txt"), "i").unwrap();

        let result = run(&mut store, &paths, tmp.path(), Path::new("bundle")).unwrap();

        let trashed = &result.affected[0].record.trashed_path;
        assert!(trashed.is_dir());
        assert_eq!(fs::read_to_string(trashed.join("inner.txt")).unwrap(), "i");
        assert!(!dir.exists());
    }

    #[test]
    fn missing_source_is_an_access_error_and_nothing_is_recorded() {
        let tmp = TempDir::new().unwrap();
        let (mut store, paths) = init_env(&tmp);

        let err = run(&mut store, &paths, tmp.path(), Path::new("ghost.txt")).unwrap_err();

        assert!(matches!(err, FecesError::Access(_)));
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn failed_move_leaves_the_store_untouched() {
        let tmp = TempDir::new().unwrap();
        let (mut store, paths) = init_env(&tmp);
        fs::write(tmp.path().join("victim.txt"), "v").unwrap();
        // Wedge the holding area shut so the move cannot land
        fs::remove_dir(paths.files_dir()).unwrap();
        fs::write(paths.files_dir(), "now a file").unwrap();

        let err = run(&mut store, &paths, tmp.path(), Path::new("victim.txt")).unwrap_err();

        assert!(matches!(err, FecesError::Relocation { .. }));
        assert!(tmp.path().join("victim.txt").exists());
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn requires_an_initialized_environment() {
        let tmp = TempDir::new().unwrap();
        let paths = FecesPaths::new(tmp.path().join(".feces"));
        let mut store = FileStore::new(paths.index_file());

        assert!(matches!(
            run(&mut store, &paths, tmp.path(), Path::new("x")),
            Err(FecesError::NotInitialized)
        ));
    }
}
