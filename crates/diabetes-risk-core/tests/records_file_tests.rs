//! Records file loading and reporting from disk.

use std::io::Write;

use chrono::NaiveDate;
use diabetes_risk_core::records::{InMemoryRecords, RecordsError};
use diabetes_risk_core::risk::ReportService;
use tempfile::NamedTempFile;

const RECORDS: &str = r#"{
    "patients": [
        { "id": "1", "given_name": "Test", "family_name": "TestNone",
          "birth_date": "1966-12-31", "gender": "F",
          "address": "1 Brookside St", "phone": "100-222-3333" },
        { "id": "2", "given_name": "Test", "family_name": "TestBorderline",
          "birth_date": "1945-06-24", "gender": "M" },
        { "id": "3", "given_name": "Test", "family_name": "TestYoung",
          "birth_date": "2004-06-18", "gender": "M" }
    ],
    "notes": [
        { "patient_id": "1", "date": "2024-12-01T10:00:00Z",
          "content": "Le patient déclare qu'il se sent très bien. Poids égal ou inférieur au poids recommandé" },
        { "patient_id": "2", "date": "2024-12-02T11:00:00Z",
          "content": "Le patient déclare qu'il ressent beaucoup de stress au travail Il se plaint également que son audition est anormale dernièrement" },
        { "patient_id": "2", "date": "2024-12-02T11:00:00Z",
          "content": "Le patient déclare avoir fait une réaction aux médicaments au cours des 3 derniers mois Il remarque également que son audition continue d'être anormale" },
        { "patient_id": "3", "date": "2024-12-03T14:30:00Z",
          "content": "Le patient déclare qu'il fume depuis peu" },
        { "patient_id": "3", "date": "2024-12-03T14:30:00Z",
          "content": "Le patient déclare qu'il est fumeur et qu'il a cessé de fumer l'année dernière Tests de laboratoire indiquant un taux de cholestérol LDL élevé" }
    ]
}"#;

fn write_records(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

#[test]
fn test_reports_from_file() {
    let file = write_records(RECORDS);
    let records = InMemoryRecords::from_json_file(file.path()).unwrap();
    let service = ReportService::new(&records, &records);

    assert_eq!(
        service.generate_report_on("1", reference_date()).unwrap(),
        "Patient: Test TestNone (age 58) son risque de diabète: Aucun risque"
    );
    assert_eq!(
        service.generate_report_on("2", reference_date()).unwrap(),
        "Patient: Test TestBorderline (age 79) son risque de diabète: Risque limité"
    );
    assert_eq!(
        service.generate_report_on("3", reference_date()).unwrap(),
        "Patient: Test TestYoung (age 20) son risque de diabète: Aucun risque"
    );
}

#[test]
fn test_assessment_lists_matched_terms() {
    let file = write_records(RECORDS);
    let records = InMemoryRecords::from_json_file(file.path()).unwrap();
    let service = ReportService::new(&records, &records);

    let assessment = service.assess_patient_on("2", reference_date()).unwrap();
    assert_eq!(assessment.matched_terms, vec!["Anormal", "Réaction"]);

    let assessment = service.assess_patient_on("3", reference_date()).unwrap();
    assert_eq!(assessment.matched_terms, vec!["Fumeur", "Cholestérol"]);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = InMemoryRecords::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RecordsError::Io(_)));
}

#[test]
fn test_invalid_birth_date_in_file() {
    let file = write_records(
        r#"{ "patients": [
            { "id": "1", "given_name": "A", "family_name": "B", "birth_date": "31/12/1966" }
        ] }"#,
    );
    let err = InMemoryRecords::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, RecordsError::Json(_)));
}
