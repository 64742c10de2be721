//! Diabetes Risk Core Library
//!
//! Diabetes risk assessment from patient demographics and practitioner notes.
//!
//! # Architecture
//!
//! ```text
//!   Patient Source          Note Source
//!         │                      │
//!   PatientSnapshot     notes (concatenated)
//!         │                      │
//!        Age             Trigger Matching
//!         │              (distinct terms)
//!         └──────────┬───────────┘
//!                    ▼
//!        Risk Classifier (rule table)
//!                    │
//!                    ▼
//!   "Patient: <given> <family> (age N) son risque de diabète: <label>"
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientSnapshot, ClinicalNote, RiskLevel, RiskAssessment)
//! - [`risk`]: Vocabulary, term matcher, age calculator, classifier, report formatter
//!   and the [`ReportService`] orchestrator
//! - [`records`]: Collaborator traits and the in-memory records file

pub mod models;
pub mod records;
pub mod risk;

// Re-export commonly used types
pub use models::{ClinicalNote, Gender, PatientSnapshot, RiskAssessment, RiskLevel};
pub use records::{InMemoryRecords, NoteSource, PatientSource, SourceError};
pub use risk::{assess, classify, count_triggers, ReportService, RiskError};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

use chrono::NaiveDate;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum DiabetesRiskError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Source error: {0}")]
    SourceError(String),
}

impl From<RiskError> for DiabetesRiskError {
    fn from(e: RiskError) -> Self {
        match e {
            RiskError::PatientNotFound(id) => DiabetesRiskError::NotFound(id),
            RiskError::InvalidDate(msg) => DiabetesRiskError::InvalidDate(msg),
            RiskError::PatientSource(msg) => DiabetesRiskError::SourceError(msg),
        }
    }
}

impl From<records::RecordsError> for DiabetesRiskError {
    fn from(e: records::RecordsError) -> Self {
        DiabetesRiskError::InvalidInput(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Load a records file from its JSON text.
#[uniffi::export]
pub fn open_records_json(json: String) -> Result<Arc<RiskEngine>, DiabetesRiskError> {
    let records = InMemoryRecords::from_json_str(&json)?;
    Ok(Arc::new(RiskEngine { records }))
}

/// Load a records file from disk.
#[uniffi::export]
pub fn open_records_file(path: String) -> Result<Arc<RiskEngine>, DiabetesRiskError> {
    let records = InMemoryRecords::from_json_file(&path)?;
    Ok(Arc::new(RiskEngine { records }))
}

/// Classify from age, gender code and distinct trigger count.
#[uniffi::export]
pub fn classify_risk(age: u32, gender: Option<String>, trigger_count: u32) -> FfiRiskLevel {
    let gender = Gender::from_code(gender.as_deref());
    classify(age, gender, trigger_count as usize).into()
}

/// Count distinct trigger terms across note bodies.
#[uniffi::export]
pub fn count_note_triggers(notes: Vec<String>) -> u32 {
    risk::count_triggers_in_notes(&notes) as u32
}

/// Assess a patient supplied by the caller, with age computed today.
#[uniffi::export]
pub fn assess_snapshot(
    patient: FfiPatientSnapshot,
    notes: Vec<String>,
) -> Result<FfiRiskAssessment, DiabetesRiskError> {
    let patient = PatientSnapshot::try_from(patient)?;
    let today = chrono::Local::now().date_naive();
    Ok(assess(&patient, &notes, today)?.into())
}

// =========================================================================
// Main API Object
// =========================================================================

/// Risk engine over a loaded records file.
#[derive(uniffi::Object)]
pub struct RiskEngine {
    records: InMemoryRecords,
}

#[uniffi::export]
impl RiskEngine {
    /// Report string for a patient.
    pub fn generate_report(&self, patient_id: String) -> Result<String, DiabetesRiskError> {
        let service = ReportService::new(&self.records, &self.records);
        Ok(service.generate_report(&patient_id)?)
    }

    /// Full assessment for a patient.
    pub fn assess_patient(&self, patient_id: String) -> Result<FfiRiskAssessment, DiabetesRiskError> {
        let service = ReportService::new(&self.records, &self.records);
        Ok(service.assess_patient(&patient_id)?.into())
    }

    /// Identifiers of all loaded patients.
    pub fn patient_ids(&self) -> Vec<String> {
        self.records.patient_ids()
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiRiskLevel {
    NoRisk,
    Borderline,
    InDanger,
    EarlyOnset,
}

impl From<RiskLevel> for FfiRiskLevel {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::None => FfiRiskLevel::NoRisk,
            RiskLevel::Borderline => FfiRiskLevel::Borderline,
            RiskLevel::InDanger => FfiRiskLevel::InDanger,
            RiskLevel::EarlyOnset => FfiRiskLevel::EarlyOnset,
        }
    }
}

/// FFI-safe patient snapshot. `birth_date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientSnapshot {
    pub id: String,
    pub given_name: String,
    pub family_name: String,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
}

impl TryFrom<FfiPatientSnapshot> for PatientSnapshot {
    type Error = DiabetesRiskError;

    fn try_from(p: FfiPatientSnapshot) -> Result<Self, Self::Error> {
        let birth_date = p
            .birth_date
            .as_deref()
            .map(|s| {
                s.parse::<NaiveDate>()
                    .map_err(|e| DiabetesRiskError::InvalidDate(format!("{}: {}", s, e)))
            })
            .transpose()?;

        Ok(PatientSnapshot {
            id: p.id,
            given_name: p.given_name,
            family_name: p.family_name,
            birth_date,
            gender: Gender::from_code(p.gender.as_deref()),
            address: None,
            phone: None,
        })
    }
}

/// FFI-safe risk assessment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRiskAssessment {
    pub patient_id: String,
    pub age: u32,
    pub trigger_count: u32,
    pub matched_terms: Vec<String>,
    pub level: FfiRiskLevel,
    pub label: String,
    pub report: String,
}

impl From<RiskAssessment> for FfiRiskAssessment {
    fn from(a: RiskAssessment) -> Self {
        Self {
            patient_id: a.patient_id,
            age: a.age,
            trigger_count: a.trigger_count as u32,
            matched_terms: a.matched_terms,
            level: a.level.into(),
            label: a.level.label().to_string(),
            report: a.report,
        }
    }
}
