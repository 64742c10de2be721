//! In-memory records, optionally loaded from a JSON records file.
//!
//! File layout:
//!
//! ```json
//! {
//!   "patients": [
//!     { "id": "1", "given_name": "Test", "family_name": "TestNone",
//!       "birth_date": "1966-12-31", "gender": "F" }
//!   ],
//!   "notes": [
//!     { "patient_id": "1", "date": "2024-12-01T10:00:00Z",
//!       "content": "Poids égal ou inférieur au poids recommandé" }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    NoteSource, PatientSource, RecordsError, RecordsResult, SourceError, SourceResult,
};
use crate::models::{ClinicalNote, PatientSnapshot};

/// Serialized form of a records file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordsFile {
    pub patients: Vec<PatientSnapshot>,
    #[serde(default)]
    pub notes: Vec<ClinicalNote>,
}

/// Patients and notes held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecords {
    patients: BTreeMap<String, PatientSnapshot>,
    notes: BTreeMap<String, Vec<ClinicalNote>>,
}

impl InMemoryRecords {
    /// Create an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parsed records file. Patient identifiers must be unique.
    pub fn from_records(file: RecordsFile) -> RecordsResult<Self> {
        let mut records = Self::new();

        for patient in file.patients {
            if records.patients.contains_key(&patient.id) {
                return Err(RecordsError::Invalid(format!(
                    "duplicate patient id: {}",
                    patient.id
                )));
            }
            records.insert_patient(patient);
        }

        for note in file.notes {
            records.add_note(note);
        }

        Ok(records)
    }

    /// Parse a records file from a JSON string.
    pub fn from_json_str(json: &str) -> RecordsResult<Self> {
        let file: RecordsFile = serde_json::from_str(json)?;
        Self::from_records(file)
    }

    /// Read and parse a records file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RecordsResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Add or replace a patient.
    pub fn insert_patient(&mut self, patient: PatientSnapshot) {
        self.patients.insert(patient.id.clone(), patient);
    }

    /// Append a note to its patient's history.
    pub fn add_note(&mut self, note: ClinicalNote) {
        self.notes
            .entry(note.patient_id.clone())
            .or_default()
            .push(note);
    }

    /// Patient identifiers, sorted.
    pub fn patient_ids(&self) -> Vec<String> {
        self.patients.keys().cloned().collect()
    }

    /// Number of patients.
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }
}

impl PatientSource for InMemoryRecords {
    fn get_patient(&self, patient_id: &str) -> SourceResult<PatientSnapshot> {
        self.patients
            .get(patient_id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(patient_id.to_string()))
    }
}

impl NoteSource for InMemoryRecords {
    fn notes_for_patient(&self, patient_id: &str) -> SourceResult<Vec<ClinicalNote>> {
        Ok(self.notes.get(patient_id).cloned().unwrap_or_default())
    }
}
