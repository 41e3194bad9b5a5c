//! `jsoncanvas fmt`

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use jsoncanvas_core::{encode, encode_pretty};
use jsoncanvas_store::CanvasStore;
use tracing::info;

pub fn run(file: &Path, write: bool, compact: bool) -> Result<()> {
    let store = CanvasStore::new(".").with_pretty(!compact);
    let canvas = store.load(file)?;

    if write {
        let path = store.save(&canvas, file)?;
        info!(path = %path.display(), "Formatted canvas");
        return Ok(());
    }

    let bytes = if compact {
        encode(&canvas)
    } else {
        encode_pretty(&canvas)
    }
    .context("Failed to encode canvas")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&bytes)?;
    writeln!(stdout)?;
    Ok(())
}
