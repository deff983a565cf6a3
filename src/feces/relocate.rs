use crate::error::{FecesError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Moves the filesystem entry at `src` to `dest`, creating any missing
/// ancestor directories of `dest` first.
///
/// A direct rename is attempted; when it fails (most commonly because `src`
/// and `dest` sit on different filesystems) the entry is copied over and the
/// source removed. After success nothing remains at `src`.
pub fn move_entry(src: &Path, dest: &Path) -> Result<()> {
    let relocation = |source: io::Error| FecesError::Relocation {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        source,
    };

    // The rename would report a missing source too, but checking up front
    // keeps the copy fallback from masking it with a confusing error.
    fs::symlink_metadata(src).map_err(relocation)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(relocation)?;
    }

    if fs::rename(src, dest).is_ok() {
        return Ok(());
    }

    copy_then_remove(src, dest).map_err(relocation)
}

fn copy_then_remove(src: &Path, dest: &Path) -> io::Result<()> {
    if src.is_dir() {
        copy_dir_all(src, dest)?;
        fs::remove_dir_all(src)
    } else {
        fs::copy(src, dest)?;
        fs::remove_file(src)
    }
}

fn copy_dir_all(src: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
