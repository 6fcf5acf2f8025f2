#![allow(non_snake_case)]
#![allow(clippy::unwrap_used)]

use super::*;

// Manifest parsing tests

#[test]
fn Manifest___from_str___parses_full_manifest() {
    let toml = r#"
schema_version = 1
id = "you_are_autosave"
name = "You Are Autosave"
version = "1.3.0"
tagline = "Show a warning when you haven't saved in a while"
type = "add-on"
blender_version_min = "4.2.0"
"#;

    let manifest = Manifest::from_str(toml).unwrap();

    assert_eq!(manifest.schema_version, 1);
    assert_eq!(manifest.name, "You Are Autosave");
    assert_eq!(manifest.version, "1.3.0");
}

#[test]
fn Manifest___from_str___ignores_unknown_keys() {
    let toml = r#"
version = "0.1.0"
permissions = ["files"]

[build]
paths_exclude_pattern = ["__pycache__/"]
"#;

    let manifest = Manifest::from_str(toml).unwrap();

    assert_eq!(manifest.version, "0.1.0");
}

#[test]
fn Manifest___from_str___missing_name_defaults_to_empty() {
    let toml = r#"
schema_version = 1
version = "1.4.2"
"#;

    let manifest = Manifest::from_str(toml).unwrap();

    assert_eq!(manifest.name, "");
    assert_eq!(manifest.version, "1.4.2");
}

#[test]
fn Manifest___from_str___empty_document_is_all_defaults() {
    let manifest = Manifest::from_str("").unwrap();

    assert_eq!(manifest.schema_version, 0);
    assert_eq!(manifest.version, "");
    assert_eq!(manifest.name, "");
}

#[test]
fn Manifest___from_str___rejects_non_numeric_schema_version() {
    let toml = r#"
schema_version = "one"
version = "1.0.0"
"#;

    let result = Manifest::from_str(toml);

    assert!(matches!(result, Err(PackError::ParseManifest { .. })));
}

#[test]
fn Manifest___from_str___rejects_invalid_toml() {
    let result = Manifest::from_str("version = ");

    assert!(matches!(result, Err(PackError::ParseManifest { .. })));
}

// File loading tests

#[test]
fn Manifest___from_file___reads_manifest_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(MANIFEST_FILE);
    std::fs::write(&path, "schema_version = 1\nversion = \"0.9.0\"\n").unwrap();

    let manifest = Manifest::from_file(&path).unwrap();

    assert_eq!(manifest.version, "0.9.0");
}

#[test]
fn Manifest___from_file___missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(MANIFEST_FILE);

    let result = Manifest::from_file(&path);

    match result {
        Err(PackError::ReadManifest { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("expected ReadManifest error, got {other:?}"),
    }
}
