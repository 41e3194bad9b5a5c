//! Error types for jsoncanvas-store

use std::path::PathBuf;

use thiserror::Error;

/// Store error type
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid canvas
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        /// File being decoded
        path: PathBuf,
        /// Decode error with element context
        #[source]
        source: jsoncanvas_core::Error,
    },

    /// The canvas could not be encoded
    #[error("failed to encode canvas for {}: {source}", .path.display())]
    Encode {
        /// Destination file
        path: PathBuf,
        /// Encode error
        #[source]
        source: jsoncanvas_core::Error,
    },

    /// The file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The directory could not be listed
    #[error("failed to list {}: {source}", .path.display())]
    List {
        /// Directory being listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Path the failing operation was working on
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. }
            | Self::List { path, .. } => path,
        }
    }

    /// Get error code for reporting
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read_failed",
            Self::Decode { source, .. } => source.code(),
            Self::Encode { .. } => "encode_failed",
            Self::Write { .. } => "write_failed",
            Self::List { .. } => "list_failed",
        }
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
