use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read a UTF-8 file and parse its contents as a JSON document.
pub fn load_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read file {}", path.display()))?;
    serde_json::from_str::<Value>(&contents)
        .with_context(|| format!("failed to parse JSON document {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_file(contents: &str) -> PathBuf {
        let filename = format!(
            "schemacheck-test-{}.json",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        let path = std::env::temp_dir().join(filename);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_json_documents() {
        let path = scratch_file("{\"enabled\":true}");
        let parsed = load_document(&path).unwrap();
        assert_eq!(parsed["enabled"], json!(true));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn rejects_malformed_json() {
        let path = scratch_file("{\"enabled\":");
        let err = load_document(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse JSON document"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn reports_missing_files() {
        let path = std::env::temp_dir().join("schemacheck-test-missing.json");
        let err = load_document(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read file"));
    }
}
