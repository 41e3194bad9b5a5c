//! Canvas Store
//!
//! Reads and writes `.canvas` files under a root directory. Writes go to a
//! temporary file next to the target and are renamed into place, so readers
//! never see a half-written canvas.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use jsoncanvas_core::{decode_with, encode, encode_pretty, Canvas, DecodeOptions};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};

/// File extension of canvas documents
pub const CANVAS_EXTENSION: &str = "canvas";

/// Whether a path names a canvas document (by extension)
#[must_use]
pub fn is_canvas_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == CANVAS_EXTENSION)
}

/// Directory-backed canvas storage
#[derive(Debug, Clone)]
pub struct CanvasStore {
    root: PathBuf,
    pretty: bool,
    decode_options: DecodeOptions,
}

impl CanvasStore {
    /// Create a store rooted at `root`, writing indented JSON
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pretty: true,
            decode_options: DecodeOptions::default(),
        }
    }

    /// Choose between indented and compact output
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the options used when loading
    #[must_use]
    pub fn with_decode_options(mut self, options: DecodeOptions) -> Self {
        self.decode_options = options;
        self
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a file name against the root; absolute paths are kept
    #[must_use]
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        let name = name.as_ref();
        if name.is_absolute() {
            name.to_path_buf()
        } else {
            self.root.join(name)
        }
    }

    /// Load and decode a canvas file
    pub fn load(&self, name: impl AsRef<Path>) -> Result<Canvas> {
        let path = self.resolve(name);
        let bytes = fs::read(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        let canvas =
            decode_with(&bytes, self.decode_options).map_err(|source| StoreError::Decode {
                path: path.clone(),
                source,
            })?;

        debug!(
            path = %path.display(),
            nodes = canvas.node_count(),
            edges = canvas.edge_count(),
            "Loaded canvas"
        );
        Ok(canvas)
    }

    /// Encode and atomically write a canvas, returning the final path
    pub fn save(&self, canvas: &Canvas, name: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.resolve(name);
        let bytes = if self.pretty {
            encode_pretty(canvas)
        } else {
            encode(canvas)
        }
        .map_err(|source| StoreError::Encode {
            path: path.clone(),
            source,
        })?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_err = |source| StoreError::Write {
            path: path.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(&bytes).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&path).map_err(|e| write_err(e.error))?;

        info!(path = %path.display(), bytes = bytes.len(), "Saved canvas");
        Ok(path)
    }

    /// Canvas files directly inside the root, sorted by path
    ///
    /// Hidden entries and subdirectories are skipped.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.root).map_err(|source| StoreError::List {
            path: self.root.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(root = %self.root.display(), error = %err, "Skipping unreadable directory entry");
                    continue;
                }
            };
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            let path = entry.path();
            if path.is_file() && is_canvas_file(&path) {
                files.push(path);
            }
        }
        files.sort();

        debug!(root = %self.root.display(), count = files.len(), "Listed canvas files");
        Ok(files)
    }
}
