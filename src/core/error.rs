use std::{io, path::PathBuf};

use thiserror::Error;

/// A malformed dictionary file.
#[derive(Debug, Error)]
#[error("{message} (line {line})")]
pub struct DecodeError {
    pub line: usize,
    pub message: String,
}

impl DecodeError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Fatal conditions of a generate run.
///
/// Structural conflicts between dictionaries are never errors; they are
/// resolved by the reconciliation rules.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The custom scan root does not exist or is not a directory.
    #[error("Can't find the specified directory: {}. Please check the --path parameter", .path.display())]
    ScanInput { path: PathBuf },

    /// A custom scan root produced no translation keys.
    #[error("Nothing to generate. No translation keys found in {}", .path.display())]
    EmptyResult { path: PathBuf },

    /// An existing dictionary file could not be decoded.
    #[error("Failed to parse dictionary file {}: {source}", .path.display())]
    ParseDecode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// The destination directory could not be created.
    #[error("Directory \"{}\" was not created: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode dictionary for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type GenerateResult<T> = Result<T, GenerateError>;
