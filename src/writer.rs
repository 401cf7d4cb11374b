//! Serializes the finished record list to disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::taxonomy::OutputRecord;
use crate::TARGET_PIPELINE;

/// Write `records` as a pretty-printed UTF-8 JSON array, replacing any existing file.
///
/// Non-ASCII text such as accented display names is written as-is, not escaped.
pub fn write_records(path: &Path, records: &[OutputRecord]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(records).context("Failed to serialize output records")?;

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(target: TARGET_PIPELINE, "JSON written: {} ({} records)", path.display(), records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{assemble, TaxonomyDetail};
    use tempfile::tempdir;

    fn eagle() -> OutputRecord {
        let taxonomy = TaxonomyDetail {
            phylum: "Chordata".to_string(),
            class: "Aves".to_string(),
            order: "Accipitriformes".to_string(),
            family: "Accipitridae".to_string(),
            genus: "Aquila".to_string(),
            species: "Aquila chrysaetos".to_string(),
        };
        assemble("Aquila chrysaetos", "Águila real", taxonomy)
    }

    #[test]
    fn test_writes_pretty_unescaped_json() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("species.json");

        write_records(&path, &[eagle()]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": \"Aquila chrysaetos\""));
        assert!(text.contains("\"display\": \"Águila real\""));
        assert!(!text.contains("\\u00c1"));

        let parsed: Vec<OutputRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![eagle()]);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("species.json");
        fs::write(&path, "stale contents that are much longer than an empty array").unwrap();

        write_records(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("species.json");

        let err = write_records(&path, &[eagle()]).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }

    #[test]
    fn test_output_is_byte_identical_across_writes() {
        let dir = tempdir().expect("Failed to create temp dir");
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");

        write_records(&first, &[eagle()]).unwrap();
        write_records(&second, &[eagle()]).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }
}
