//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Media Carousel
//!
//! Errors only exist at the application boundary: configuration, manifest
//! parsing, media discovery and terminal setup. Carousel navigation itself
//! never fails — missing optional pieces degrade to doing nothing.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all fallible startup and configuration paths.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Gallery manifest could not be parsed.
    #[error("Invalid gallery manifest {path:?}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    /// Media root directory could not be scanned.
    #[error("Failed to scan media directory {path:?}: {source}")]
    MediaScan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Media root does not exist or is not a directory.
    #[error("Media root is not a directory: {0:?}")]
    InvalidMediaRoot(PathBuf),
}

impl AppError {
    /// Helper for manifest errors carrying a parse failure.
    pub fn manifest(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Helper for scan errors with path context.
    pub fn media_scan(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::MediaScan {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_error_formats_path_and_reason() {
        let err = AppError::manifest("/media/gallery.toml", "missing field `name`");
        let msg = err.to_string();
        assert!(msg.contains("gallery.toml"));
        assert!(msg.contains("missing field `name`"));
    }

    #[test]
    fn io_error_converts() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
