//! Build command implementation

use std::fs;

use anyhow::{Context, Result};
use autosave_pack::{Manifest, blender, dist};

/// Ask Blender to build the distributable archive under `dist/`.
pub fn run() -> Result<()> {
    let manifest = Manifest::load()?;
    let zip_path = dist::archive_path(&manifest.version)?;

    if let Some(zip_dir) = zip_path.parent() {
        fs::create_dir_all(zip_dir)
            .with_context(|| format!("cannot create output directory {}", zip_dir.display()))?;
    }

    println!("Creating {}", zip_path.display());
    blender::build(&zip_path).context("extension build failed")
}
