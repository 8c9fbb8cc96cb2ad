//! Reading documents from disk.

use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::Document;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read document: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse JSON document: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML document: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl Document {
    /// Parse a document, choosing YAML for `.yml`/`.yaml` and JSON otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml") | Some("yaml")
        );
        let doc: Document = if is_yaml {
            serde_yaml::from_str(&contents)?
        } else {
            serde_json::from_str(&contents)?
        };
        debug!(
            path = %path.display(),
            chapters = doc.chapters.len(),
            blocks = doc.block_count(),
            "loaded document"
        );
        Ok(doc)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("doc.yaml");
        std::fs::write(
            &yaml,
            "metadata:\n  title: Y\nchapters:\n  - id: c1\n    title: One\n    blocks:\n      - id: b1\n        type: h1\n        content: Hello\n",
        )
        .unwrap();
        let doc = Document::from_file(&yaml).unwrap();
        assert_eq!(doc.metadata.title, "Y");
        assert_eq!(doc.block_count(), 1);

        let json = dir.path().join("doc.json");
        std::fs::write(&json, doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(Document::from_file(&json).unwrap(), doc);
    }

    #[test]
    fn test_parse_error_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Document::from_file(&path),
            Err(DocumentError::JsonError(_))
        ));
    }
}
