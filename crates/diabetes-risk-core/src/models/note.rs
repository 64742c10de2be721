//! Clinical note models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A practitioner's free-text note, as supplied by the notes service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicalNote {
    /// Note identifier in the notes service
    #[serde(default)]
    pub id: Option<String>,
    /// Patient the note belongs to
    pub patient_id: String,
    /// When the note was written
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Note body
    pub content: String,
}

impl ClinicalNote {
    /// Create a note with only the fields the risk assessment needs.
    pub fn new(patient_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            patient_id: patient_id.into(),
            date: None,
            content: content.into(),
        }
    }
}

/// Concatenate note bodies into the single text the term matcher scans.
pub fn concat_notes<S: AsRef<str>>(notes: &[S]) -> String {
    notes
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_notes() {
        assert_eq!(concat_notes(&["Poids stable.", "Fumeur."]), "Poids stable. Fumeur.");
        assert_eq!(concat_notes::<&str>(&[]), "");
    }

    #[test]
    fn test_note_json() {
        let json = r#"{
            "patient_id": "2",
            "date": "2024-12-02T11:00:00Z",
            "content": "Réaction aux médicaments"
        }"#;

        let note: ClinicalNote = serde_json::from_str(json).unwrap();
        assert_eq!(note.patient_id, "2");
        assert!(note.id.is_none());
        assert!(note.date.is_some());
    }
}
