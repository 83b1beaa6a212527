//! Biological age assessment library.
//!
//! The [`assessment`] module hosts the deterministic scoring core (factor
//! catalog, category aggregation, age estimation, trajectory projection,
//! and recommendation generation) together with the intake guard, the
//! history-store contract, and the HTTP router. [`cohort`] layers a CSV
//! batch importer on top of the same engine.

pub mod assessment;
pub mod cohort;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{
    assessment_router, generate_recommendations, AnswerSet, AnswerValue, AssessmentEngine,
    AssessmentId, AssessmentOutcome, AssessmentRecord, AssessmentService, AssessmentServiceError,
    AssessmentView, Category, CategoryScore, EvidenceRating, Factor, HistoryEntryView,
    HistoryError, HistoryStore, IntakeGuard, IntakeRejection, IntakeViolation, Intervention,
    ModelVersion, Priority, Recommendation, ScoringProfile, TimeToEffect, TrajectoryPoint,
    TrajectoryProjection, TrajectoryRequest, TrajectorySeries, HISTORY_CAPACITY,
    MAX_RECOMMENDATIONS, MIN_RECOMMENDATIONS, TIME_HORIZON_YEARS,
};
