//! Report formatting.

use crate::models::RiskLevel;

/// Render the one-line diabetes risk report.
pub fn format_report(given_name: &str, family_name: &str, age: u32, level: RiskLevel) -> String {
    format!(
        "Patient: {} {} (age {}) son risque de diabète: {}",
        given_name,
        family_name,
        age,
        level.label()
    )
}
