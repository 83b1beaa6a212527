use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::domain::{AssessmentId, AssessmentOutcome};

/// Most records a store has to retain; older entries may be discarded.
pub const HISTORY_CAPACITY: usize = 10;

/// Stored result of one scored submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub recorded_at: DateTime<Utc>,
    pub answers: AnswerSet,
    pub outcome: AssessmentOutcome,
}

impl AssessmentRecord {
    /// Full response view returned when a submission is scored.
    pub fn view(&self) -> AssessmentView {
        AssessmentView {
            assessment_id: self.assessment_id.clone(),
            recorded_at: self.recorded_at,
            outcome: self.outcome.clone(),
        }
    }

    /// Compact view used by history listings.
    pub fn summary_view(&self) -> HistoryEntryView {
        HistoryEntryView {
            assessment_id: self.assessment_id.clone(),
            recorded_at: self.recorded_at,
            chronological_age: self.outcome.chronological_age,
            biological_age: self.outcome.biological_age,
            difference: self.outcome.difference,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Implementations return the newest record first and may discard entries
/// beyond [`HISTORY_CAPACITY`].
pub trait HistoryStore: Send + Sync {
    fn push(&self, record: AssessmentRecord) -> Result<(), HistoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, HistoryError>;
    fn clear(&self) -> Result<(), HistoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history store unavailable: {0}")]
    Unavailable(String),
}

/// Scoring response for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub assessment_id: AssessmentId,
    pub recorded_at: DateTime<Utc>,
    pub outcome: AssessmentOutcome,
}

/// Sanitized listing entry for history endpoints; raw answers stay private.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryView {
    pub assessment_id: AssessmentId,
    pub recorded_at: DateTime<Utc>,
    pub chronological_age: i32,
    pub biological_age: i32,
    pub difference: i32,
}
