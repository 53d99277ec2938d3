//! Catalog serialization and atomic file output.

use crate::error::{CatalogError, Result};
use crate::types::Catalog;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// A catalog file that was fully written
#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
    pub sha256: String,
}

/// Minimal-whitespace JSON array
pub fn to_compact_json(catalog: &Catalog) -> Result<String> {
    Ok(serde_json::to_string(catalog)?)
}

/// Two-space indented JSON array, same content as [`to_compact_json`]
pub fn to_pretty_json(catalog: &Catalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Parse a catalog back from either JSON form
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    Ok(serde_json::from_str(json)?)
}

/// Read a catalog file written by this tool (or any equivalent one).
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content)
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Write `bytes` to `path` so readers only ever see the old file or the complete new one.
///
/// The content goes to a sibling `.tmp` file first and is then renamed over the target.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<WrittenFile> {
    let write_err = |source| CatalogError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let temp_path = temp_path_for(path);
    if let Err(e) = fs::write(&temp_path, bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(e));
    }
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(e));
    }

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(WrittenFile {
        path: path.to_path_buf(),
        bytes: bytes.len(),
        sha256: sha256_hex(bytes),
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Serialize once into both forms, then write each file.
///
/// Both writes are attempted even if the first fails; every failure is
/// returned together in [`CatalogError::Outputs`].
pub fn write_catalog(
    catalog: &Catalog,
    compact_path: &Path,
    pretty_path: &Path,
) -> Result<(WrittenFile, WrittenFile)> {
    let compact = to_compact_json(catalog)?;
    let pretty = to_pretty_json(catalog)?;

    let compact_result = write_atomic(compact_path, compact.as_bytes());
    let pretty_result = write_atomic(pretty_path, pretty.as_bytes());

    match (compact_result, pretty_result) {
        (Ok(c), Ok(p)) => Ok((c, p)),
        (c, p) => {
            let errors: Vec<CatalogError> = [c.err(), p.err()].into_iter().flatten().collect();
            for e in &errors {
                error!("Catalog output failed: {}", e);
            }
            Err(CatalogError::Outputs(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StarRecord;

    fn sample() -> Catalog {
        Catalog {
            stars: vec![
                StarRecord {
                    id: 0,
                    ra: 11.9999,
                    dec: 0.0,
                    magnitude: 2.0,
                    name: "Vega".to_string(),
                },
                StarRecord {
                    id: 1,
                    ra: 2.3872,
                    dec: -57.9293,
                    magnitude: 2.0,
                    name: "Sirius".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_compact_key_order_and_format() {
        let json = to_compact_json(&sample()).unwrap();
        assert_eq!(
            json,
            r#"[{"id":0,"ra":11.9999,"dec":0.0,"magnitude":2.0,"name":"Vega"},{"id":1,"ra":2.3872,"dec":-57.9293,"magnitude":2.0,"name":"Sirius"}]"#
        );
    }

    #[test]
    fn test_pretty_differs_only_in_whitespace() {
        let catalog = sample();
        let compact = to_compact_json(&catalog).unwrap();
        let pretty = to_pretty_json(&catalog).unwrap();

        assert!(pretty.starts_with("[\n  {\n    \"id\": 0,\n    \"ra\": 11.9999,"));
        let squeezed: String = pretty
            .lines()
            .map(str::trim)
            .collect::<String>()
            .replace("\": ", "\":");
        assert_eq!(squeezed, compact);
    }

    #[test]
    fn test_empty_catalog_is_empty_array() {
        let empty = Catalog::default();
        assert_eq!(to_compact_json(&empty).unwrap(), "[]");
        assert_eq!(to_pretty_json(&empty).unwrap(), "[]");
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_compact_round_trips_to_pretty() {
        let catalog = sample();
        let compact = to_compact_json(&catalog).unwrap();
        let reparsed = parse_catalog(&compact).unwrap();
        assert_eq!(reparsed, catalog);
        assert_eq!(to_pretty_json(&reparsed).unwrap(), to_pretty_json(&catalog).unwrap());
    }

    #[test]
    fn test_write_atomic_creates_parents_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/stars.json");

        let written = write_atomic(&path, b"[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert_eq!(written.bytes, 2);
        assert_eq!(written.sha256, sha256_hex(b"[]"));
        assert!(!dir.path().join("nested/out/stars.json.tmp").exists());
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stars.json");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_catalog_reports_failed_output_and_keeps_other() {
        let dir = tempfile::tempdir().unwrap();
        // a directory in place of the target makes the rename fail
        let blocked = dir.path().join("blocked");
        fs::create_dir_all(blocked.join("inner")).unwrap();
        let pretty = dir.path().join("stars_pretty.json");

        let err = write_catalog(&sample(), &blocked, &pretty).unwrap_err();
        match err {
            CatalogError::Outputs(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(matches!(errors[0], CatalogError::WriteOutput { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(pretty.exists());
        assert!(!dir.path().join("blocked.tmp").exists());
    }

    #[test]
    fn test_write_catalog_pretty_failure_keeps_compact() {
        let dir = tempfile::tempdir().unwrap();
        let compact = dir.path().join("stars.json");
        let blocked = dir.path().join("blocked_pretty");
        fs::create_dir_all(blocked.join("inner")).unwrap();

        let err = write_catalog(&sample(), &compact, &blocked).unwrap_err();
        match err {
            CatalogError::Outputs(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(
                    matches!(&errors[0], CatalogError::WriteOutput { path, .. } if path == &blocked)
                );
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            fs::read_to_string(&compact).unwrap(),
            to_compact_json(&sample()).unwrap()
        );
    }

    #[test]
    fn test_write_catalog_reports_both_failures() {
        let dir = tempfile::tempdir().unwrap();
        let compact = dir.path().join("blocked_compact");
        let pretty = dir.path().join("blocked_pretty");
        fs::create_dir_all(compact.join("inner")).unwrap();
        fs::create_dir_all(pretty.join("inner")).unwrap();

        let err = write_catalog(&sample(), &compact, &pretty).unwrap_err();
        assert!(err.to_string().starts_with("2 output(s) failed"));
        match err {
            CatalogError::Outputs(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .all(|e| matches!(e, CatalogError::WriteOutput { .. })));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_error_is_reported_as_json_error() {
        let err = parse_catalog("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbe4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
