//! `jsoncanvas list`

use std::path::Path;

use anyhow::Result;
use jsoncanvas_store::CanvasStore;

pub fn run(dir: &Path) -> Result<()> {
    let store = CanvasStore::new(dir);
    let files = store.list()?;

    if files.is_empty() {
        println!("No canvas files in {}", dir.display());
        return Ok(());
    }
    for file in files {
        let name = file.strip_prefix(dir).unwrap_or(&file);
        println!("{}", name.display());
    }
    Ok(())
}
