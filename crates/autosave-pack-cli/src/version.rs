//! Version command implementation

use anyhow::Result;
use autosave_pack::Manifest;

/// Print the extension version from the manifest, nothing else. Handy for
/// tagging releases from shell scripts.
pub fn run() -> Result<()> {
    let manifest = Manifest::load()?;

    println!("{}", manifest.version);

    Ok(())
}
