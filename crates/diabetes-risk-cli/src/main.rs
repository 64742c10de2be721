mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use diabetes_risk_core::models::Gender;
use diabetes_risk_core::records::InMemoryRecords;
use diabetes_risk_core::risk::{
    classify, matched_terms, trigger_terms, ReportService, VOCABULARY_VERSION,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{CliConfig, AS_OF_ENV, DEFAULT_LOG_FILTER, RECORDS_ENV};

#[derive(Parser)]
#[command(name = "diabetes-risk")]
#[command(about = "Diabetes risk reports from patient records and practitioner notes")]
struct Cli {
    /// Records file (JSON with "patients" and "notes")
    #[arg(long, env = RECORDS_ENV, global = true)]
    records: Option<PathBuf>,

    /// Compute ages on this date instead of today (YYYY-MM-DD)
    #[arg(long, env = AS_OF_ENV, global = true)]
    as_of: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Risk report for one patient
    Report {
        /// Patient identifier
        patient_id: String,
        /// Print the full assessment as JSON
        #[arg(long)]
        json: bool,
    },
    /// Risk report for every patient in the records file
    ReportAll,
    /// Classify from age, gender and trigger count
    Classify {
        /// Age in whole years
        #[arg(long)]
        age: u32,
        /// Gender code (M or F)
        #[arg(long)]
        gender: Option<String>,
        /// Number of distinct trigger terms
        #[arg(long)]
        triggers: usize,
    },
    /// List the trigger terms found in some text
    Triggers {
        /// Note text; several arguments are treated as several notes
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print the trigger vocabulary
    Vocabulary,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?,
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::new(cli.records, cli.as_of)?;

    match cli.command {
        Commands::Report { patient_id, json } => {
            let records = load_records(&config)?;
            let service = ReportService::new(&records, &records);
            let assessment = service
                .assess_patient_on(&patient_id, config.as_of())
                .with_context(|| format!("cannot assess patient {}", patient_id))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                println!("{}", assessment.report);
            }
        }
        Commands::ReportAll => {
            let records = load_records(&config)?;
            let service = ReportService::new(&records, &records);
            for patient_id in records.patient_ids() {
                match service.generate_report_on(&patient_id, config.as_of()) {
                    Ok(report) => println!("{}", report),
                    Err(e) => tracing::error!(patient_id = %patient_id, error = %e, "report failed"),
                }
            }
        }
        Commands::Classify {
            age,
            gender,
            triggers,
        } => {
            let level = classify(age, Gender::from_code(gender.as_deref()), triggers);
            println!("{}", level);
        }
        Commands::Triggers { text } => {
            let found = matched_terms(&text.join(" "));
            println!("{} trigger(s)", found.len());
            for term in found {
                println!("  {}", term);
            }
        }
        Commands::Vocabulary => {
            println!("Trigger vocabulary v{}", VOCABULARY_VERSION);
            for term in trigger_terms() {
                println!("  {}", term);
            }
        }
    }

    Ok(())
}

fn load_records(config: &CliConfig) -> Result<InMemoryRecords> {
    let path = config.records_path()?;
    let records = InMemoryRecords::from_json_file(path)
        .with_context(|| format!("cannot load records from {}", path.display()))?;
    tracing::info!(patients = records.patient_count(), path = %path.display(), "records loaded");
    Ok(records)
}
