//! Invoking the `blender` binary for extension validation and building.
//!
//! Blender's stdio is inherited so its own progress and error output reaches
//! the user directly; only the exit status flows back through this module.

use std::path::Path;
use std::process::Command;

use crate::{PackError, PackResult};

/// Name of the Blender binary, resolved via PATH.
pub const BLENDER_BIN: &str = "blender";

/// Command that asks Blender to validate the extension in the current directory.
pub fn validate_command() -> Command {
    let mut cmd = Command::new(BLENDER_BIN);
    cmd.args(["--command", "extension", "validate"]);
    cmd
}

/// Command that asks Blender to build the extension archive at `output`.
pub fn build_command(output: &Path) -> Command {
    let mut cmd = Command::new(BLENDER_BIN);
    cmd.args(["--command", "extension", "build", "--output-filepath"]);
    cmd.arg(output);
    cmd
}

/// Run `blender --command extension validate`, blocking until it exits.
pub fn validate() -> PackResult<()> {
    run(validate_command(), "extension validate")
}

/// Run `blender --command extension build`, blocking until it exits.
pub fn build(output: &Path) -> PackResult<()> {
    run(build_command(output), "extension build")
}

fn run(mut cmd: Command, operation: &'static str) -> PackResult<()> {
    let status = cmd.status().map_err(PackError::LaunchBlender)?;

    if !status.success() {
        return Err(PackError::BlenderFailed { operation, status });
    }

    Ok(())
}
