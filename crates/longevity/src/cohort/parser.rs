use super::mapping;
use super::normalizer::{normalize_header, normalize_value};
use crate::assessment::AnswerSet;
use std::io::Read;

/// One survey row from a cohort export.
#[derive(Debug, Clone)]
pub struct CohortMember {
    pub respondent: String,
    pub answers: AnswerSet,
}

/// Questions whose cells hold a delimited list rather than a single token.
const LIST_QUESTIONS: &[&str] = &["conditions"];

enum ColumnRole {
    Respondent,
    Question(&'static str),
    Ignored,
}

pub(crate) fn parse_members<R: Read>(reader: R) -> Result<Vec<CohortMember>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let roles: Vec<ColumnRole> = headers
        .iter()
        .map(|header| {
            let normalized = normalize_header(header);
            if mapping::is_respondent_column(&normalized) {
                ColumnRole::Respondent
            } else if let Some(question) = mapping::question_for_normalized(&normalized) {
                ColumnRole::Question(question)
            } else {
                ColumnRole::Ignored
            }
        })
        .collect();

    let mut members = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut respondent = None;
        let mut answers = AnswerSet::new();

        for (role, cell) in roles.iter().zip(record.iter()) {
            if cell.is_empty() {
                continue;
            }
            match role {
                ColumnRole::Respondent => {
                    if respondent.is_none() {
                        respondent = Some(cell.to_string());
                    }
                }
                ColumnRole::Question(question) => {
                    if LIST_QUESTIONS.contains(question) {
                        answers.insert(*question, split_list(cell));
                    } else {
                        answers.insert(*question, normalize_value(cell));
                    }
                }
                ColumnRole::Ignored => {}
            }
        }

        members.push(CohortMember {
            respondent: respondent.unwrap_or_else(|| format!("row-{}", index + 1)),
            answers,
        });
    }

    Ok(members)
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split([';', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
