//! Storage errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt record on line {line}: '{value}' is not a yyyy-mm-dd date")]
    CorruptRecord { line: usize, value: String },
}

impl StorageError {
    /// Returns a closure wrapping an I/O error with the path it concerns
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| StorageError::Io { path, source }
    }
}
