use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FecesError {
    #[error("Not initialized; run 'feces init' first")]
    NotInitialized,

    #[error("The feces environment already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Failed to initialize the feces environment: {source}")]
    Initialization {
        #[source]
        source: io::Error,
    },

    #[error("File does not exist or access is denied: {0}")]
    Access(PathBuf),

    #[error("There is no such plopped file: '{0}'")]
    RecordNotFound(String),

    #[error("Invalid duration format (received '{0}')")]
    InvalidDuration(String),

    #[error("Failed to move '{from}' to '{to}': {source}")]
    Relocation {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Index file is missing at {0}")]
    StoreMissing(PathBuf),

    #[error("Index file at {path} is not valid JSON: {source}")]
    StoreCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FecesError>;
