//! Reading `blender_manifest.toml`.

use std::path::Path;

use serde::Deserialize;

use crate::{PackError, PackResult};

/// Well-known manifest filename, resolved against the current directory.
pub const MANIFEST_FILE: &str = "blender_manifest.toml";

/// Just enough of a model for `blender_manifest.toml` to read what the
/// packaging tool needs. Blender defines many more keys; they are ignored.
///
/// Every field is defaulted so a sparse manifest still decodes. A field with
/// the wrong type (say, a string `schema_version`) is a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub schema_version: i64,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub name: String,
}

impl Manifest {
    /// Load the manifest from `blender_manifest.toml` in the current directory.
    pub fn load() -> PackResult<Self> {
        Self::from_file(MANIFEST_FILE)
    }

    /// Load the manifest from an explicit path.
    pub fn from_file(path: impl AsRef<Path>) -> PackResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PackError::ReadManifest {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| PackError::ParseManifest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse manifest TOML from a string.
    pub fn from_str(content: &str) -> PackResult<Self> {
        toml::from_str(content).map_err(|source| PackError::ParseManifest {
            path: MANIFEST_FILE.into(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "manifest/manifest_tests.rs"]
mod manifest_tests;
