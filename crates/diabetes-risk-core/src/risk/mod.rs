//! Diabetes risk engine.
//!
//! Pipeline: Patient + Notes → Age → Trigger Matching → Classification → Report

mod age;
mod classifier;
mod matcher;
mod report;
mod vocabulary;

pub use age::*;
pub use classifier::*;
pub use matcher::*;
pub use report::*;
pub use vocabulary::*;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{ClinicalNote, PatientSnapshot, RiskAssessment};
use crate::records::{NoteSource, PatientSource, SourceError};

/// Risk engine errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Patient source error: {0}")]
    PatientSource(String),
}

pub type RiskResult<T> = Result<T, RiskError>;

/// Assess one patient from already fetched data.
///
/// `notes` are note bodies; their order does not matter.
pub fn assess<S: AsRef<str>>(
    patient: &PatientSnapshot,
    notes: &[S],
    today: NaiveDate,
) -> RiskResult<RiskAssessment> {
    let age = age_on(patient.birth_date, today)?;

    let text = crate::models::concat_notes(notes);
    let matched = matched_terms(&text);
    let trigger_count = matched.len();
    debug!(
        patient_id = %patient.id,
        trigger_count,
        matched = ?matched,
        "counted trigger terms"
    );

    let level = classify(age, patient.gender, trigger_count);
    let report = format_report(&patient.given_name, &patient.family_name, age, level);

    Ok(RiskAssessment {
        patient_id: patient.id.clone(),
        age,
        trigger_count,
        matched_terms: matched.into_iter().map(str::to_string).collect(),
        level,
        report,
    })
}

/// Produces risk reports from the patient and notes collaborators.
///
/// Holds no state between calls; one service can serve any number of
/// concurrent requests.
pub struct ReportService<'a> {
    patients: &'a dyn PatientSource,
    notes: &'a dyn NoteSource,
}

impl<'a> ReportService<'a> {
    /// Create a new report service.
    pub fn new(patients: &'a dyn PatientSource, notes: &'a dyn NoteSource) -> Self {
        Self { patients, notes }
    }

    /// Assess a patient, with age computed on `today`.
    ///
    /// The notes collaborator is not queried when the patient lookup fails.
    pub fn assess_patient_on(&self, patient_id: &str, today: NaiveDate) -> RiskResult<RiskAssessment> {
        info!(patient_id, "generating diabetes report");

        let patient = self.patients.get_patient(patient_id).map_err(|e| match e {
            SourceError::NotFound(_) => RiskError::PatientNotFound(patient_id.to_string()),
            SourceError::Unavailable(msg) => RiskError::PatientSource(msg),
        })?;

        let notes = self.fetch_notes(patient_id);
        let bodies: Vec<&str> = notes.iter().map(|n| n.content.as_str()).collect();

        let assessment = assess(&patient, &bodies, today)?;
        info!(patient_id, report = %assessment.report, "diabetes report generated");
        Ok(assessment)
    }

    /// Assess a patient, with age computed on the current local date.
    pub fn assess_patient(&self, patient_id: &str) -> RiskResult<RiskAssessment> {
        self.assess_patient_on(patient_id, Local::now().date_naive())
    }

    /// Report string for a patient, with age computed on `today`.
    pub fn generate_report_on(&self, patient_id: &str, today: NaiveDate) -> RiskResult<String> {
        Ok(self.assess_patient_on(patient_id, today)?.report)
    }

    /// Report string for a patient, with age computed on the current local date.
    pub fn generate_report(&self, patient_id: &str) -> RiskResult<String> {
        Ok(self.assess_patient(patient_id)?.report)
    }

    /// A failing notes collaborator means no clinical history.
    fn fetch_notes(&self, patient_id: &str) -> Vec<ClinicalNote> {
        match self.notes.notes_for_patient(patient_id) {
            Ok(notes) => notes,
            Err(e) => {
                warn!(patient_id, error = %e, "notes unavailable, assessing with no notes");
                Vec::new()
            }
        }
    }
}
