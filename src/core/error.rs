//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`CvsScoutError`] which provides comprehensive error handling
//! for all cvs-scout operations. It uses `thiserror` for ergonomic error definitions
//! and includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`CvsScoutError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, CvsScoutError>`
//!
//! # Error Categories
//! - **Working copy**: No metadata directory found, path outside the copy, unsaved paths
//! - **Client execution**: Missing binary, spawn failures, abnormal termination
//! - **Settings**: Unreadable or malformed configuration files
//! - **Status parsing**: Missing revision fields in status output

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for cvs-scout
#[derive(Error, Debug)]
pub enum CvsScoutError {
    // Working copy errors
    #[error("Unable to find a '{marker}' directory in or above {start}")]
    RepositoryNotFound { marker: String, start: PathBuf },

    #[error("Cannot run CVS commands without a saved file path")]
    PathUnavailable,

    #[error("Path {path} is outside the working copy rooted at {root}")]
    OutsideWorkingCopy { path: PathBuf, root: PathBuf },

    // Client execution errors
    #[error("CVS client not found at '{binary}'. Set \"binary_path\" in the cvs-scout settings file to the location of your cvs executable")]
    BinaryNotFound { binary: PathBuf },

    #[error("Failed to launch '{binary}': {source}")]
    SpawnFailed {
        binary: PathBuf,
        source: std::io::Error,
    },

    #[error("'{binary}' was terminated before producing a result")]
    Terminated { binary: PathBuf },

    #[error("Empty command line")]
    EmptyCommandLine,

    // Settings errors
    #[error("Could not find a configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read settings file '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    SettingsWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // Status parsing errors
    #[error("No '{field}' field in the status output for {path}")]
    RevisionNotFound { field: String, path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using CvsScoutError
pub type Result<T> = std::result::Result<T, CvsScoutError>;

impl CvsScoutError {
    /// Create a repository not found error
    pub fn repository_not_found(marker: impl Into<String>, start: impl Into<PathBuf>) -> Self {
        Self::RepositoryNotFound {
            marker: marker.into(),
            start: start.into(),
        }
    }

    /// Create an outside working copy error
    pub fn outside_working_copy(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self::OutsideWorkingCopy {
            path: path.into(),
            root: root.into(),
        }
    }

    /// Create a binary not found error
    pub fn binary_not_found(binary: impl Into<PathBuf>) -> Self {
        Self::BinaryNotFound {
            binary: binary.into(),
        }
    }

    /// Create a spawn failed error
    pub fn spawn_failed(binary: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            binary: binary.into(),
            source,
        }
    }

    /// Create a terminated error
    pub fn terminated(binary: impl Into<PathBuf>) -> Self {
        Self::Terminated {
            binary: binary.into(),
        }
    }

    /// Create a settings read error
    pub fn settings_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsRead {
            path: path.into(),
            source,
        }
    }

    /// Create a settings parse error
    pub fn settings_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SettingsParse {
            path: path.into(),
            source,
        }
    }

    /// Create a settings write error
    pub fn settings_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a revision not found error
    pub fn revision_not_found(field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::RevisionNotFound {
            field: field.into(),
            path: path.into(),
        }
    }
}
