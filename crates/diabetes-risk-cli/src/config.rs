//! CLI runtime configuration.
//!
//! Resolved once at startup from arguments and environment, then passed to
//! the commands. Commands never read the environment themselves.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};

/// Environment variable naming the records file.
pub const RECORDS_ENV: &str = "DIABETES_RISK_RECORDS";

/// Environment variable overriding the evaluation date.
pub const AS_OF_ENV: &str = "DIABETES_RISK_AS_OF";

/// Default log directives when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "diabetes_risk=info,diabetes_risk_core=info";

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CliConfig {
    records_path: Option<PathBuf>,
    as_of: NaiveDate,
}

impl CliConfig {
    /// Validate the records path and settle the evaluation date.
    ///
    /// `as_of` defaults to the current local date.
    pub fn new(records_path: Option<PathBuf>, as_of: Option<NaiveDate>) -> Result<Self> {
        if let Some(path) = &records_path {
            if !path.is_file() {
                bail!("records file not found: {}", path.display());
            }
        }

        Ok(Self {
            records_path,
            as_of: as_of.unwrap_or_else(|| Local::now().date_naive()),
        })
    }

    /// Records file, required by commands that look patients up.
    pub fn records_path(&self) -> Result<&Path> {
        match &self.records_path {
            Some(path) => Ok(path),
            None => bail!("no records file: pass --records or set {}", RECORDS_ENV),
        }
    }

    /// Date ages are computed on.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }
}
