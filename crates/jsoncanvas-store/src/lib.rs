//! JSON Canvas store
//!
//! File handling for canvas documents:
//! - Store: load, atomic save and directory listing of `.canvas` files
//! - Error: I/O and decode failures, tagged with the path involved
//!
//! The store only moves bytes; all format knowledge lives in
//! `jsoncanvas-core`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{is_canvas_file, CanvasStore, CANVAS_EXTENSION};
