use crate::commands::{CmdResult, FecesPaths};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, paths: &FecesPaths) -> Result<CmdResult> {
    paths.ensure_initialized()?;
    let listed = store.all()?;
    Ok(CmdResult::default().with_listed(listed))
}
