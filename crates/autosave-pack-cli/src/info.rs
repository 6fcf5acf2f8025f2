//! Info command implementation

use anyhow::Result;
use autosave_pack::Manifest;

/// Print the extension name and version from the manifest.
pub fn run() -> Result<()> {
    let manifest = Manifest::load()?;

    println!("Name   : {}", manifest.name);
    println!("Version: {}", manifest.version);

    Ok(())
}
