//! Patient and note collaborators.
//!
//! The risk engine never owns patient data: it reads a [`PatientSnapshot`]
//! through a [`PatientSource`] and the patient's notes through a
//! [`NoteSource`]. [`InMemoryRecords`] implements both over a records file.

mod memory;

pub use memory::*;

use thiserror::Error;

use crate::models::{ClinicalNote, PatientSnapshot};

/// Errors reported by a collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Supplies patient demographics.
pub trait PatientSource: Send + Sync {
    /// Look up a patient by identifier.
    fn get_patient(&self, patient_id: &str) -> SourceResult<PatientSnapshot>;
}

/// Supplies clinical notes.
pub trait NoteSource: Send + Sync {
    /// All notes of a patient, possibly none.
    fn notes_for_patient(&self, patient_id: &str) -> SourceResult<Vec<ClinicalNote>>;
}

/// Errors loading a records file.
#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid records: {0}")]
    Invalid(String),
}

pub type RecordsResult<T> = Result<T, RecordsError>;
