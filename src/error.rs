use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building a corpus.
/// A read failure names the document it belongs to; one failing document
/// never aborts or corrupts the rest of the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read document {path}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Path of the document this error belongs to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::ReadDocument { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
