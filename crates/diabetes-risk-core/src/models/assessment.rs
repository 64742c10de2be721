//! Risk assessment models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Diabetes risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// No trigger, or a combination the rules do not flag
    None,
    /// Few triggers for a patient aged 30 or more
    Borderline,
    /// Enough triggers to warrant follow-up
    InDanger,
    /// Trigger count indicating early onset
    EarlyOnset,
}

impl RiskLevel {
    /// All categories, in increasing severity.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::None,
        RiskLevel::Borderline,
        RiskLevel::InDanger,
        RiskLevel::EarlyOnset,
    ];

    /// Label used in the rendered report.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::None => "Aucun risque",
            RiskLevel::Borderline => "Risque limité",
            RiskLevel::InDanger => "Danger",
            RiskLevel::EarlyOnset => "Apparition précoce",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Assessed patient
    pub patient_id: String,
    /// Age in whole years on the evaluation date
    pub age: u32,
    /// Number of distinct vocabulary terms found in the notes
    pub trigger_count: usize,
    /// Canonical labels of the terms that were found, in vocabulary order
    pub matched_terms: Vec<String>,
    /// Risk category
    pub level: RiskLevel,
    /// Rendered report
    pub report: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = RiskLevel::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            vec!["Aucun risque", "Risque limité", "Danger", "Apparition précoce"]
        );
        assert_eq!(RiskLevel::InDanger.to_string(), "Danger");
    }
}
