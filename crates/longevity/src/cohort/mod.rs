//! Batch scoring for survey exports.
//!
//! A cohort CSV holds one respondent per row, with columns mapped onto
//! survey questions through a tolerant header table. Rows are scored with
//! the same engine as individual submissions and rolled up into a report.

mod mapping;
mod normalizer;
mod parser;

pub use parser::CohortMember;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::assessment::engine::round1;
use crate::assessment::{AssessmentEngine, AssessmentOutcome};

#[derive(Debug)]
pub enum CohortImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CohortImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CohortImportError::Io(err) => write!(f, "failed to read cohort export: {}", err),
            CohortImportError::Csv(err) => write!(f, "invalid cohort CSV data: {}", err),
        }
    }
}

impl std::error::Error for CohortImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CohortImportError::Io(err) => Some(err),
            CohortImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CohortImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CohortImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct CohortImporter;

impl CohortImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CohortMember>, CohortImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CohortMember>, CohortImportError> {
        Ok(parser::parse_members(reader)?)
    }
}

/// Scored row of a cohort report.
#[derive(Debug, Clone, Serialize)]
pub struct CohortMemberOutcome {
    pub respondent: String,
    pub outcome: AssessmentOutcome,
}

/// Aggregates across the whole cohort. Averages are zero for empty exports.
#[derive(Debug, Clone, Serialize)]
pub struct CohortSummary {
    pub respondents: usize,
    pub average_biological_age: f64,
    pub average_difference: f64,
    pub leading_risks: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CohortReport {
    pub members: Vec<CohortMemberOutcome>,
    pub summary: CohortSummary,
}

impl CohortReport {
    /// Scores every member and rolls the outcomes up.
    ///
    /// Rows are scored as-is; the intake guard only applies to interactive
    /// submissions, and the engine falls back to its defaults for missing
    /// or malformed cells.
    pub fn build(engine: &AssessmentEngine, members: Vec<CohortMember>) -> Self {
        let members: Vec<CohortMemberOutcome> = members
            .into_iter()
            .map(|member| CohortMemberOutcome {
                outcome: engine.evaluate(&member.answers),
                respondent: member.respondent,
            })
            .collect();

        let summary = summarize(&members);
        Self { members, summary }
    }
}

fn summarize(members: &[CohortMemberOutcome]) -> CohortSummary {
    let respondents = members.len();
    if respondents == 0 {
        return CohortSummary {
            respondents: 0,
            average_biological_age: 0.0,
            average_difference: 0.0,
            leading_risks: Vec::new(),
        };
    }

    let total_age: f64 = members
        .iter()
        .map(|member| f64::from(member.outcome.biological_age))
        .sum();
    let total_difference: f64 = members
        .iter()
        .map(|member| f64::from(member.outcome.difference))
        .sum();

    let mut risk_counts: HashMap<&str, usize> = HashMap::new();
    for member in members {
        for factor in &member.outcome.factors {
            if factor.impact > 0.0 {
                *risk_counts.entry(factor.name.as_str()).or_insert(0) += 1;
            }
        }
    }
    let mut risks: Vec<(&str, usize)> = risk_counts.into_iter().collect();
    risks.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    CohortSummary {
        respondents,
        average_biological_age: round1(total_age / respondents as f64),
        average_difference: round1(total_difference / respondents as f64),
        leading_risks: risks
            .into_iter()
            .take(3)
            .map(|(name, _)| name.to_string())
            .collect(),
    }
}
