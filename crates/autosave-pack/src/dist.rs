//! Deriving the distributable archive path.

use std::path::{Path, PathBuf};

use crate::{PackError, PackResult};

/// Directory the built archive lands in, relative to the extension source.
pub const DIST_DIR: &str = "dist";

/// Filename slug of the extension, matching its `id` on the Blender
/// extensions platform.
pub const EXTENSION_SLUG: &str = "you-are-autosave";

/// Derive the archive path for a manifest version, for example
/// `dist/you-are-autosave-v1.3.0.zip` for version `1.3.0`.
///
/// The version string is embedded verbatim except that path separators are
/// rejected, so a hostile or malformed manifest cannot steer the archive
/// outside the dist directory.
pub fn archive_path(version: &str) -> PackResult<PathBuf> {
    if version.contains(['/', '\\']) {
        return Err(PackError::UnsafeVersion(version.to_string()));
    }

    let zip_name = format!("{EXTENSION_SLUG}-v{version}.zip");
    Ok(Path::new(DIST_DIR).join(zip_name))
}
