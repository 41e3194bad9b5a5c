//! `jsoncanvas check`

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use jsoncanvas_core::{DecodeOptions, Error};
use jsoncanvas_store::{CanvasStore, StoreError};
use tracing::debug;

pub fn run(files: &[PathBuf], strict: bool) -> Result<()> {
    let options = if strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::permissive()
    };
    let store = CanvasStore::new(".").with_decode_options(options);

    let mut failed = 0;
    for file in files {
        if !check_file(&store, file) {
            failed += 1;
        }
    }

    debug!(total = files.len(), failed, strict, "Check finished");
    if failed > 0 {
        bail!("{failed} of {} file(s) failed", files.len());
    }
    Ok(())
}

fn check_file(store: &CanvasStore, file: &Path) -> bool {
    match store.load(file) {
        Ok(canvas) => {
            println!(
                "✅ {} ({} nodes, {} edges)",
                file.display(),
                canvas.node_count(),
                canvas.edge_count()
            );
            true
        }
        Err(StoreError::Decode {
            source: Error::Validation(violations),
            ..
        }) => {
            println!("❌ {}: {} violation(s)", file.display(), violations.len());
            for violation in &violations {
                println!("   - {violation}");
            }
            false
        }
        Err(err) => {
            println!("❌ {} [{}]: {err}", file.display(), err.code());
            false
        }
    }
}
