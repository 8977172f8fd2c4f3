//! Typed error definitions for file_falcon.
//! Configuration errors surface before any filesystem mutation; file operation
//! errors describe a single copy/move failure and are counted by the executor.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classification used for logs and exit handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    FileOperation,
}

#[derive(Debug, Error)]
pub enum FalconError {
    #[error("Source folder does not exist: {0}")]
    SourceNotFound(PathBuf),

    #[error("Destination folder does not exist: {0}")]
    DestNotFound(PathBuf),

    #[error("{label} is not a directory: {path}")]
    NotADirectory { label: &'static str, path: PathBuf },

    #[error("Cannot read {label} '{path}': {source}")]
    Unreadable {
        label: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write to {label} '{path}': {source}")]
    Unwritable {
        label: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No file types selected; select at least one extension")]
    NoTypesSelected,

    #[error("Unknown category '{0}'; run `file_falcon categories` for the list")]
    UnknownCategory(String),

    #[error("Invalid category name '{0}': must be a single folder name")]
    InvalidCategoryName(String),

    #[error("Source folder is the category folder it would fill: {0}")]
    SourceIsCategoryFolder(PathBuf),

    #[error("Failed to {op} '{src}' -> '{dest}': {source}")]
    FileOperation {
        op: &'static str,
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FalconError {
    /// Whether this error blocks a run or accounts for a single file.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FalconError::FileOperation { .. } => ErrorKind::FileOperation,
            _ => ErrorKind::Configuration,
        }
    }

    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            FalconError::SourceNotFound(_) => 10,
            FalconError::DestNotFound(_) => 11,
            FalconError::NotADirectory { .. } => 12,
            FalconError::Unreadable { .. } => 13,
            FalconError::Unwritable { .. } => 14,
            FalconError::NoTypesSelected => 20,
            FalconError::UnknownCategory(_) => 21,
            FalconError::InvalidCategoryName(_) => 22,
            FalconError::SourceIsCategoryFolder(_) => 23,
            FalconError::FileOperation { .. } => 30,
        }
    }
}

pub type Result<T> = std::result::Result<T, FalconError>;
