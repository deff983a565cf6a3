use crate::commands::{CmdMessage, CmdResult, FecesPaths};
use crate::error::{FecesError, Result};
use std::fs;
use std::io::ErrorKind;

pub fn run(paths: &FecesPaths) -> Result<CmdResult> {
    match fs::create_dir(paths.root()) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(FecesError::AlreadyInitialized(paths.root().to_path_buf()));
        }
        Err(e) => return Err(FecesError::Initialization { source: e }),
    }
    fs::create_dir(paths.files_dir()).map_err(|source| FecesError::Initialization { source })?;
    fs::write(paths.index_file(), "{}").map_err(|source| FecesError::Initialization { source })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized the feces environment at {}",
        paths.root().display()
    )));
    Ok(result)
}
