//! Patient models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Administrative gender as recorded by the patient service.
///
/// The patient service stores a one-letter code (`"M"` or `"F"`). Anything else,
/// including a missing code, is kept as [`Gender::Unspecified`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Gender {
    /// Parse a gender code, case-insensitively.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some(c) if c.eq_ignore_ascii_case("m") => Gender::Male,
            Some(c) if c.eq_ignore_ascii_case("f") => Gender::Female,
            _ => Gender::Unspecified,
        }
    }

    /// The one-letter code, if the gender is known.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Gender::Male => Some("M"),
            Gender::Female => Some("F"),
            Gender::Unspecified => None,
        }
    }
}

impl From<Option<String>> for Gender {
    fn from(code: Option<String>) -> Self {
        Gender::from_code(code.as_deref())
    }
}

impl From<Gender> for Option<String> {
    fn from(gender: Gender) -> Self {
        gender.code().map(str::to_string)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or("?"))
    }
}

/// Demographic snapshot of a patient, as supplied by the patient service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientSnapshot {
    /// Patient identifier in the patient service
    pub id: String,
    /// Given name
    pub given_name: String,
    /// Family name
    pub family_name: String,
    /// Date of birth; upstream validation should always provide it
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Gender code
    #[serde(default)]
    pub gender: Gender,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
}

impl PatientSnapshot {
    /// Create a snapshot with the fields the risk assessment needs.
    pub fn new(
        id: impl Into<String>,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        birth_date: NaiveDate,
        gender: Gender,
    ) -> Self {
        Self {
            id: id.into(),
            given_name: given_name.into(),
            family_name: family_name.into(),
            birth_date: Some(birth_date),
            gender,
            address: None,
            phone: None,
        }
    }

    /// Given and family name, space separated.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}
