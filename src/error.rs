//! Error types for the extraction pipeline.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A source file could not be read. Aborts the whole pass.
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn path(&self) -> &Path {
        match self {
            Error::FileRead { path, .. } | Error::FileWrite { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
