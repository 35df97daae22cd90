use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Document;

/// Errors that can occur while saving or loading document snapshots.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to access snapshot file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// A serializable snapshot of one editing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// The document state
    pub document: Document,
    /// Version of the application when the snapshot was taken
    pub version: String,
}

impl DocumentSnapshot {
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Writes the document as pretty-printed JSON.
pub fn save_document(document: &Document, path: &Path) -> PersistenceResult<()> {
    let snapshot = DocumentSnapshot::new(document);
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads a document snapshot back from JSON.
pub fn load_document(path: &Path) -> PersistenceResult<Document> {
    let json = fs::read_to_string(path)?;
    let snapshot: DocumentSnapshot = serde_json::from_str(&json)?;
    if snapshot.version != env!("CARGO_PKG_VERSION") {
        warn!(
            "snapshot written by version {}, current is {}",
            snapshot.version,
            env!("CARGO_PKG_VERSION")
        );
    }
    Ok(snapshot.document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Style, factory};
    use egui::{Color32, Pos2};

    fn populated_document() -> Document {
        let mut doc = Document::new();
        let style = Style {
            color: Color32::RED,
            width: 2.5,
            opacity: 180,
            filled: true,
        };
        doc.active_layer_mut()
            .unwrap()
            .add_element(factory::create_circle(Pos2::new(10.0, 20.0), 8.0, style));
        doc.add_layer("inks");
        doc
    }

    #[test]
    fn snapshot_json_round_trip() {
        let doc = populated_document();
        let snapshot = DocumentSnapshot::new(&doc);

        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let restored: DocumentSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.document, doc);
        assert_eq!(restored.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn save_and_load_from_disk() {
        let doc = populated_document();
        let path = std::env::temp_dir().join(format!("sketchpad_save_{}.json", std::process::id()));

        save_document(&doc, &path).unwrap();
        let restored = load_document(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(restored, doc);
        assert_eq!(restored.active_layer_id(), doc.active_layer_id());
    }

    #[test]
    fn load_missing_file_errors() {
        let path = std::env::temp_dir().join("sketchpad_does_not_exist.json");
        assert!(matches!(
            load_document(&path),
            Err(PersistenceError::Io(_))
        ));
    }
}
