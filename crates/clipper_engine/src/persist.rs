use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clipper_core::FinishedNote;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::filename::sanitize_filename;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("no free filename for {0}")]
    NameExhausted(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

const MAX_NAME_ATTEMPTS: usize = 1000;

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes notes into a directory through a temp file, never replacing an
/// existing note.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Writes `note` as `{sanitised name}.{ext}`, or `{name} 1.{ext}`,
    /// `{name} 2.{ext}`, ... when the name is taken.
    pub fn write_note(&self, note: &FinishedNote) -> Result<PathBuf, PersistError> {
        let stem = sanitize_filename(&note.file_name);
        self.write_unique(&stem, &note.extension, &note.body)
    }

    pub fn write_unique(
        &self,
        stem: &str,
        extension: &str,
        content: &str,
    ) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = if attempt == 0 {
                format!("{stem}.{extension}")
            } else {
                format!("{stem} {attempt}.{extension}")
            };
            let target = self.dir.join(name);
            // persist_noclobber fails instead of replacing a concurrent writer's file.
            match tmp.persist_noclobber(&target) {
                Ok(_) => return Ok(target),
                Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
                    tmp = err.file;
                }
                Err(err) => return Err(PersistError::Io(err.error)),
            }
        }
        Err(PersistError::NameExhausted(stem.to_string()))
    }
}
