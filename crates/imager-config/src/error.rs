//! Error types for preset and settings operations.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    /// Reading a preset file.
    Read,
    /// Writing a preset file.
    Write,
    /// Creating a preset directory.
    CreateDir,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read file",
            Self::Write => "write file",
            Self::CreateDir => "create directory",
        })
    }
}

/// Errors from loading, saving, resolving or validating presets.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem failure, with the path involved.
    #[error("failed to {op} '{}': {source}", .path.display())]
    Io {
        /// What was being attempted.
        op: FileOp,
        /// Path of the file or directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed preset TOML.
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A preset could not be serialized.
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No file, user preset or factory preset by this name.
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// The preset parsed but its values are unusable.
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),
}

impl ConfigError {
    /// Reading `path` failed.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::io(FileOp::Read, path, source)
    }

    /// Writing `path` failed.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::io(FileOp::Write, path, source)
    }

    /// Creating the directory `path` failed.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::io(FileOp::CreateDir, path, source)
    }

    fn io(op: FileOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
