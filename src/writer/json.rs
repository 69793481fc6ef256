// file: src/writer/json.rs
// description: json export of structured documents
// reference: internal rendering rules

use crate::error::{ProcessorError, Result};
use crate::models::StructuredDocument;
use crate::writer::DocumentWriter;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    exported_at: String,
    section_count: usize,
    #[serde(flatten)]
    document: &'a StructuredDocument,
}

pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl DocumentWriter for JsonWriter {
    fn write(&self, document: &StructuredDocument, output: &Path) -> Result<()> {
        let export = JsonExport {
            exported_at: Utc::now().to_rfc3339(),
            section_count: document.section_count(),
            document,
        };

        let payload = if self.pretty {
            serde_json::to_string_pretty(&export)?
        } else {
            serde_json::to_string(&export)?
        };

        fs::write(output, payload).map_err(|e| {
            ProcessorError::Render(format!("cannot write {}: {}", output.display(), e))
        })?;

        info!("JSON output written: {}", output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;
    use tempfile::TempDir;

    #[test]
    fn test_json_round_trips_document_fields() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");
        let document = StructuredDocument::new(
            "T".to_string(),
            vec![Section::new("Results", "findings")],
        );

        JsonWriter::new(true).write(&document, &output).unwrap();

        let payload = std::fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(parsed["title"], "T");
        assert_eq!(parsed["section_count"], 1);
        assert_eq!(parsed["sections"][0]["heading"], "Results");
        assert!(parsed["exported_at"].is_string());
    }
}
