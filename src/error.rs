//! Crate-level error type

use thiserror::Error;

use crate::domain::{ListError, ParseError};
use crate::storage::StorageError;

/// Any error a command can produce
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
