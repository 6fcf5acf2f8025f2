//! Validate command implementation

use anyhow::{Context, Result};
use autosave_pack::blender;

/// Ask Blender to validate the extension in the current directory.
pub fn run() -> Result<()> {
    blender::validate().context("extension validation failed")
}
