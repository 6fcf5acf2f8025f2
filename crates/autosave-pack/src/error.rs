//! Error types for packaging operations.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while packaging the extension.
#[derive(Debug, Error)]
pub enum PackError {
    /// The manifest file could not be read.
    #[error("cannot read manifest {}: {source}", path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not valid TOML, or a field has the wrong type.
    #[error("cannot parse manifest {}: {source}", path.display())]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The version string cannot be embedded into a filename.
    #[error("version {0:?} contains a path separator and cannot be used in the archive name")]
    UnsafeVersion(String),

    /// The `blender` binary could not be started at all.
    #[error("cannot run blender: {0}")]
    LaunchBlender(#[source] std::io::Error),

    /// Blender ran but reported failure via its exit status.
    #[error("blender {operation} failed: {status}")]
    BlenderFailed {
        operation: &'static str,
        status: ExitStatus,
    },
}
