use crate::assessment::domain::{Category, ModelVersion};

const BASELINE_CATEGORIES: &[Category] = &[
    Category::Basic,
    Category::Diet,
    Category::Activity,
    Category::Lifestyle,
    Category::Environment,
    Category::Medical,
];

const EXTENDED_CATEGORIES: &[Category] = &[
    Category::Basic,
    Category::Diet,
    Category::Activity,
    Category::Lifestyle,
    Category::MentalHealth,
    Category::SocialConnection,
    Category::Environment,
    Category::Medical,
];

/// Tunable scoring parameters for one model version: which categories are
/// scored, their relative weights, and the normaliser for percentage scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringProfile {
    model: ModelVersion,
}

impl ScoringProfile {
    pub const fn baseline() -> Self {
        Self {
            model: ModelVersion::Baseline,
        }
    }

    pub const fn extended() -> Self {
        Self {
            model: ModelVersion::Extended,
        }
    }

    pub const fn for_model(model: ModelVersion) -> Self {
        Self { model }
    }

    pub const fn model(self) -> ModelVersion {
        self.model
    }

    /// Categories scored by this model, in display order.
    pub const fn categories(self) -> &'static [Category] {
        match self.model {
            ModelVersion::Baseline => BASELINE_CATEGORIES,
            ModelVersion::Extended => EXTENDED_CATEGORIES,
        }
    }

    /// Relative emphasis of a category in the total adjustment. Weights sum
    /// to 1.0 across the categories a model scores.
    pub const fn weight(self, category: Category) -> f64 {
        match self.model {
            ModelVersion::Baseline => match category {
                Category::Basic => 0.10,
                Category::Diet => 0.20,
                Category::Activity => 0.20,
                Category::Lifestyle => 0.25,
                Category::MentalHealth | Category::SocialConnection => 0.0,
                Category::Environment => 0.10,
                Category::Medical => 0.15,
            },
            ModelVersion::Extended => match category {
                Category::Basic => 0.10,
                Category::Diet => 0.15,
                Category::Activity => 0.15,
                Category::Lifestyle => 0.20,
                Category::MentalHealth => 0.10,
                Category::SocialConnection => 0.05,
                Category::Environment => 0.10,
                Category::Medical => 0.15,
            },
        }
    }

    /// Normaliser used when rescaling a raw category score onto 0..100.
    pub const fn max_score(self, category: Category) -> u8 {
        match self.model {
            ModelVersion::Baseline => match category {
                Category::Basic => 3,
                Category::Diet => 6,
                Category::Activity => 4,
                Category::Lifestyle => 8,
                Category::MentalHealth | Category::SocialConnection => 0,
                Category::Environment => 5,
                Category::Medical => 4,
            },
            ModelVersion::Extended => match category {
                Category::Basic => 3,
                Category::Diet => 6,
                Category::Activity => 4,
                Category::Lifestyle => 5,
                Category::MentalHealth => 6,
                Category::SocialConnection => 4,
                Category::Environment => 5,
                Category::Medical => 4,
            },
        }
    }
}
