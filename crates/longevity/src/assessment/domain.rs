use super::answers::AnswerValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVersion {
    Baseline,
    Extended,
}

impl ModelVersion {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::Extended => "Extended",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Basic,
    Diet,
    Activity,
    Lifestyle,
    MentalHealth,
    SocialConnection,
    Environment,
    Medical,
}

impl Category {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Basic,
            Self::Diet,
            Self::Activity,
            Self::Lifestyle,
            Self::MentalHealth,
            Self::SocialConnection,
            Self::Environment,
            Self::Medical,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Profile",
            Self::Diet => "Diet & Nutrition",
            Self::Activity => "Physical Activity",
            Self::Lifestyle => "Lifestyle",
            Self::MentalHealth => "Mental Wellbeing",
            Self::SocialConnection => "Social Connection",
            Self::Environment => "Environment",
            Self::Medical => "Medical History",
        }
    }
}

/// One scored answer. `impact` is in years of biological age; negative values
/// are protective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    pub category: Category,
    pub impact: f64,
    pub description: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub raw_score: i32,
    pub max_score: u8,
    /// Raw score rescaled onto 0..100 with 50 as the neutral midpoint.
    pub percentage_score: f64,
    pub factors: Vec<Factor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub chronological_age: i32,
    pub biological_age: i32,
    pub difference: i32,
    /// Signed sum of weighted factor impacts, in years, before rounding the
    /// final age to a whole number.
    pub total_adjustment: f64,
    pub confidence_interval: f64,
    pub lower_bound: i32,
    pub upper_bound: i32,
    pub factors: Vec<Factor>,
    pub category_scores: BTreeMap<Category, CategoryScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank; lower comes first in recommendation lists.
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceRating {
    Strong,
    Moderate,
    Emerging,
    Personalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeToEffect {
    ShortTerm,
    MediumTerm,
    LongTerm,
    Varies,
    Ongoing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub category: &'static str,
    pub text: String,
    pub priority: Priority,
    pub evidence_rating: EvidenceRating,
    pub time_to_effect: TimeToEffect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub year: u32,
    pub chronological_age: i32,
    pub biological_age: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySeries {
    pub no_change: Vec<TrajectoryPoint>,
    pub with_interventions: Vec<TrajectoryPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryProjection {
    pub current: AssessmentOutcome,
    pub trajectories: TrajectorySeries,
    pub time_horizon: u32,
}

/// A hypothetical answer override used when projecting trajectories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    #[serde(alias = "factor")]
    pub question: String,
    pub value: AnswerValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);
