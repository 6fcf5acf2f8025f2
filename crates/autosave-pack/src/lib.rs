//! Packaging pipeline for the You Are Autosave Blender extension.
//!
//! This crate does the non-interactive part of shipping the extension: it
//! reads `blender_manifest.toml` for identity and version metadata, derives
//! the distributable archive path, and drives the `blender` binary to
//! validate the extension and build the archive.
//!
//! The actual validation and zip construction happen inside Blender; this
//! crate only orchestrates the invocations and reports their outcome.
//!
//! # Example
//!
//! ```no_run
//! use autosave_pack::{Manifest, dist};
//!
//! let manifest = Manifest::load()?;
//! let zip_path = dist::archive_path(&manifest.version)?;
//! println!("would build {}", zip_path.display());
//! # Ok::<(), autosave_pack::PackError>(())
//! ```

pub mod blender;
pub mod dist;
mod error;
mod manifest;

pub use error::PackError;
pub use manifest::{MANIFEST_FILE, Manifest};

/// Result type for packaging operations.
pub type PackResult<T> = Result<T, PackError>;
