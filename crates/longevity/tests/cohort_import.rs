//! Integration specifications for the cohort CSV importer.
//!
//! A survey export flows through header mapping, value normalization, and
//! batch scoring into a cohort report, all through the public crate surface.

use longevity::cohort::{CohortImportError, CohortImporter, CohortReport};
use longevity::{AssessmentEngine, ModelVersion};
use std::io::Cursor;

const EXPORT: &str = "\
Respondent,Age,Gender,Diet Quality,How often do you exercise?,Sleep Duration,Smoking Status,Stress Level,Chronic Conditions
alice,34,female,excellent,daily,optimal,no,low,
bob,58,male,poor,none,less,yes,high,\"hypertension; diabetes\"
,41,female,average,occasional,optimal,no,,\n";

fn engine() -> AssessmentEngine {
    AssessmentEngine::for_model(ModelVersion::Extended)
}

#[test]
fn export_rows_become_scored_members() {
    let members = CohortImporter::from_reader(Cursor::new(EXPORT)).expect("export parses");
    assert_eq!(members.len(), 3);
    assert_eq!(members[0].respondent, "alice");
    assert_eq!(members[2].respondent, "row-3");
    assert_eq!(
        members[1].answers.items("conditions"),
        Some(&["hypertension".to_string(), "diabetes".to_string()][..])
    );

    let report = CohortReport::build(&engine(), members);
    assert_eq!(report.summary.respondents, 3);

    let alice = &report.members[0].outcome;
    let bob = &report.members[1].outcome;
    assert!(alice.biological_age < alice.chronological_age);
    assert!(bob.biological_age > bob.chronological_age);
    assert!(report
        .summary
        .leading_risks
        .iter()
        .any(|risk| risk == "Current Smoker"));
}

#[test]
fn unmapped_columns_are_skipped_not_fatal() {
    let export = "Name,Age,Shoe Size,Exercise\neve,29,38,regular\n";
    let members = CohortImporter::from_reader(Cursor::new(export)).expect("export parses");

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].answers.scalar("age"), Some("29"));
    assert_eq!(members[0].answers.scalar("exercise"), Some("regular"));
    assert!(!members[0].answers.has_answer("shoe-size"));
}

#[test]
fn ragged_exports_are_rejected() {
    let export = "Respondent,Age\nalice,30\nbob,41,extra\n";
    let error =
        CohortImporter::from_reader(Cursor::new(export)).expect_err("ragged row rejected");
    assert!(matches!(error, CohortImportError::Csv(_)));
}

#[test]
fn report_from_a_file_on_disk() {
    let path = std::env::temp_dir().join("longevity-cohort-import-test.csv");
    std::fs::write(&path, EXPORT).expect("fixture written");

    let members = CohortImporter::from_path(&path).expect("export parses");
    let report = CohortReport::build(&engine(), members);
    assert_eq!(report.summary.respondents, 3);

    std::fs::remove_file(&path).ok();
}
