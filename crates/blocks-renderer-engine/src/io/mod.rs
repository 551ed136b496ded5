use crate::document::Document;
use crate::parsing::DocumentError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document {path}: {source}")]
    Document {
        path: PathBuf,
        source: DocumentError,
    },
}

/// Read and parse a JSON document from disk
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    Document::from_slice(&bytes).map_err(|source| IoError::Document {
        path: path.to_path_buf(),
        source,
    })
}

/// Write rendered output, creating parent directories as needed
pub fn write_output(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        fs::write(
            &path,
            r#"[{"type":"paragraph","children":[{"type":"text","text":"Hello"}]}]"#,
        )
        .unwrap();

        let document = read_document(&path).unwrap();
        assert_eq!(document.len(), 1);
        assert_eq!(document.roots()[0].plain_text(), "Hello");
    }

    #[test]
    fn test_read_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        assert!(matches!(read_document(&path), Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_invalid_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(
            err,
            IoError::Document {
                source: DocumentError::Json(_),
                ..
            }
        ));
    }

    #[test]
    fn test_write_output_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/out/page.html");

        write_output(&path, "<p>hi</p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }
}
