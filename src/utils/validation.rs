// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{ProcessorError, Result};
use std::fs;
use std::path::Path;

const SUPPORTED_EXTENSIONS: [&str; 2] = ["pdf", "txt"];

pub struct Validator;

impl Validator {
    pub fn validate_input_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            ProcessorError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(ProcessorError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_supported_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => Ok(()),
            _ => Err(ProcessorError::Validation(format!(
                "Unsupported input type (expected pdf or txt): {}",
                path.display()
            ))),
        }
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(ProcessorError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_existing_file_validates() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "content").unwrap();

        assert!(Validator::validate_input_path(file.path()).is_ok());
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(Validator::validate_input_path(Path::new("/nonexistent/x.pdf")).is_err());
    }

    #[test]
    fn test_extension_check() {
        assert!(Validator::validate_supported_extension(Path::new("paper.pdf")).is_ok());
        assert!(Validator::validate_supported_extension(Path::new("paper.PDF")).is_ok());
        assert!(Validator::validate_supported_extension(Path::new("notes.txt")).is_ok());
        assert!(Validator::validate_supported_extension(Path::new("doc.docx")).is_err());
        assert!(Validator::validate_supported_extension(Path::new("noext")).is_err());
    }

    #[test]
    fn test_empty_content_rejected() {
        assert!(Validator::validate_content_not_empty("  \n ").is_err());
        assert!(Validator::validate_content_not_empty("text").is_ok());
    }
}
