//! Task file storage
//!
//! Tasks live in a single UTF-8 text file, one record per line (see
//! [`super::record`]). The file and its parent directory are created on first
//! access, so a fresh install loads an empty list.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{record, StorageError};
use crate::domain::Task;

/// Default location of the task file, relative to the working directory
pub const DEFAULT_PATH: &str = "data/wowo.txt";

/// The file backing a task list
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    /// Creates a task file handle for the given path (nothing is touched yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all tasks from the file
    pub fn load(&self) -> Result<Vec<Task>, StorageError> {
        self.ensure_exists()?;

        let mut file = File::open(&self.path).map_err(StorageError::io(&self.path))?;

        // Lock is released when file is dropped
        file.lock_shared().map_err(StorageError::io(&self.path))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(StorageError::io(&self.path))?;

        let tasks = record::decode_all(&content)?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    /// Writes all tasks to the file, replacing its content
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        self.ensure_exists()?;

        // Write to temp file first
        let temp_path = self.path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(StorageError::io(&temp_path))?;

            file.lock_exclusive().map_err(StorageError::io(&temp_path))?;

            let mut writer = BufWriter::new(&file);
            writer
                .write_all(record::encode_all(tasks).as_bytes())
                .and_then(|_| writer.flush())
                .map_err(StorageError::io(&temp_path))?;
        }

        fs::rename(&temp_path, &self.path).map_err(StorageError::io(&self.path))?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Saved tasks");
        Ok(())
    }

    /// Creates the parent directory and an empty file if they are missing
    fn ensure_exists(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StorageError::io(parent))?;
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(StorageError::io(&self.path))?;

        Ok(())
    }
}
