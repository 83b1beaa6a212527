//! Biological age assessment pipeline.
//!
//! Survey answers pass an intake guard and are scored against the factor
//! catalog for the active model. The engine aggregates weighted category
//! impacts into an age estimate with uncertainty bounds; recommendation and
//! trajectory builders consume the same outcome downstream.

pub mod answers;
pub(crate) mod catalog;
pub mod domain;
pub(crate) mod engine;
pub mod history;
pub(crate) mod intake;
pub(crate) mod recommend;
pub mod router;
pub mod service;
pub(crate) mod trajectory;

#[cfg(test)]
mod tests;

pub use answers::{AnswerSet, AnswerValue};
pub use catalog::ScoringProfile;
pub use domain::{
    AssessmentId, AssessmentOutcome, Category, CategoryScore, EvidenceRating, Factor,
    Intervention, ModelVersion, Priority, Recommendation, TimeToEffect, TrajectoryPoint,
    TrajectoryProjection, TrajectorySeries,
};
pub use engine::AssessmentEngine;
pub use history::{
    AssessmentRecord, AssessmentView, HistoryEntryView, HistoryError, HistoryStore,
    HISTORY_CAPACITY,
};
pub use intake::{IntakeGuard, IntakeRejection, IntakeViolation};
pub use recommend::{generate_recommendations, MAX_RECOMMENDATIONS, MIN_RECOMMENDATIONS};
pub use router::{assessment_router, TrajectoryRequest};
pub use service::{AssessmentService, AssessmentServiceError};
pub use trajectory::TIME_HORIZON_YEARS;
