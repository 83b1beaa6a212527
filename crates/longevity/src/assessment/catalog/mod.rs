mod entries;
mod profile;

pub use profile::ScoringProfile;

use crate::assessment::answers::{parse_leading_int, AnswerSet};
use crate::assessment::domain::{Category, Factor, ModelVersion};
use entries::{
    QuestionRules, BMI_BANDS, BMI_CONFIDENCE, CONDITIONS_CONFIDENCE, CONDITIONS_FACTOR_NAME,
    CONDITION_IMPACT_CAP, CONDITION_SCORE_CAP, CONDITION_YEARS_EACH, CORE_QUESTIONS,
    EXTENDED_QUESTIONS,
};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Confidence assigned when a model carries no per-factor confidence.
pub(crate) const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Questions the extended model files under its dedicated mental health and
/// social connection categories instead of lifestyle.
const EXTENDED_CATEGORY_MOVES: &[(&str, Category)] = &[
    ("stress", Category::MentalHealth),
    ("mental-activity", Category::MentalHealth),
    ("mindfulness", Category::MentalHealth),
    ("social", Category::SocialConnection),
];

/// Raw score and scored factors for one category.
#[derive(Debug, Default)]
pub(crate) struct CategoryEvaluation {
    pub score: i32,
    pub factors: Vec<Factor>,
}

/// The factor tables of one model version, resolved once per process.
pub(crate) struct FactorCatalog {
    model: ModelVersion,
    questions: Vec<QuestionRules>,
    bmi_confidence: f64,
    conditions_confidence: f64,
}

pub(crate) fn catalog_for(model: ModelVersion) -> &'static FactorCatalog {
    static BASELINE: OnceLock<FactorCatalog> = OnceLock::new();
    static EXTENDED: OnceLock<FactorCatalog> = OnceLock::new();

    match model {
        ModelVersion::Baseline => {
            BASELINE.get_or_init(|| FactorCatalog::build(ModelVersion::Baseline))
        }
        ModelVersion::Extended => {
            EXTENDED.get_or_init(|| FactorCatalog::build(ModelVersion::Extended))
        }
    }
}

impl FactorCatalog {
    fn build(model: ModelVersion) -> Self {
        let mut questions: Vec<QuestionRules> = CORE_QUESTIONS.to_vec();
        match model {
            ModelVersion::Baseline => {
                for question in &mut questions {
                    question.confidence = DEFAULT_CONFIDENCE;
                }
            }
            ModelVersion::Extended => {
                for question in &mut questions {
                    if let Some((_, category)) = EXTENDED_CATEGORY_MOVES
                        .iter()
                        .find(|(moved, _)| *moved == question.question)
                    {
                        question.category = *category;
                    }
                }
                questions.extend_from_slice(EXTENDED_QUESTIONS);
            }
        }

        let (bmi_confidence, conditions_confidence) = match model {
            ModelVersion::Baseline => (DEFAULT_CONFIDENCE, DEFAULT_CONFIDENCE),
            ModelVersion::Extended => (BMI_CONFIDENCE, CONDITIONS_CONFIDENCE),
        };

        Self {
            model,
            questions,
            bmi_confidence,
            conditions_confidence,
        }
    }

    #[cfg(test)]
    pub(crate) fn questions_for_tests(&self) -> &[QuestionRules] {
        &self.questions
    }

    /// Scores every answered question. Every category the model knows is
    /// present in the result, including categories without any factors.
    ///
    /// Derived factors keep their original positions: BMI leads the basic
    /// category and chronic conditions lead the medical category.
    pub(crate) fn evaluate(&self, answers: &AnswerSet) -> BTreeMap<Category, CategoryEvaluation> {
        let mut evaluations = BTreeMap::new();
        for category in ScoringProfile::for_model(self.model).categories() {
            evaluations.insert(*category, CategoryEvaluation::default());
        }

        self.score_bmi(answers, &mut evaluations);
        for question in self.questions.iter().filter(|q| q.category != Category::Medical) {
            score_question(question, answers, &mut evaluations);
        }
        self.score_conditions(answers, &mut evaluations);
        for question in self.questions.iter().filter(|q| q.category == Category::Medical) {
            score_question(question, answers, &mut evaluations);
        }

        evaluations
    }

    /// BMI is derived from height in centimetres and weight in kilograms,
    /// and only scored when both answers are present and numeric.
    fn score_bmi(&self, answers: &AnswerSet, evaluations: &mut BTreeMap<Category, CategoryEvaluation>) {
        let (Some(height), Some(weight)) = (answers.scalar("height"), answers.scalar("weight"))
        else {
            return;
        };
        let (Some(height_cm), Some(weight_kg)) =
            (parse_leading_int(height), parse_leading_int(weight))
        else {
            return;
        };

        let meters = height_cm as f64 / 100.0;
        let bmi = weight_kg as f64 / (meters * meters);
        let Some(band) = BMI_BANDS
            .iter()
            .find(|band| bmi >= band.min && band.max.map_or(true, |max| bmi < max))
        else {
            return;
        };

        let slot = evaluations.entry(Category::Basic).or_default();
        slot.score += band.score_delta;
        slot.factors.push(Factor {
            name: band.name.to_string(),
            category: Category::Basic,
            impact: band.impact,
            description: band.description.to_string(),
            confidence: self.bmi_confidence,
        });
    }

    fn score_conditions(
        &self,
        answers: &AnswerSet,
        evaluations: &mut BTreeMap<Category, CategoryEvaluation>,
    ) {
        let Some(items) = answers.items("conditions") else {
            return;
        };
        if items.is_empty() {
            return;
        }

        let count = items.len();
        let impact = (count as f64 * CONDITION_YEARS_EACH).min(CONDITION_IMPACT_CAP);
        let score_delta = count.min(CONDITION_SCORE_CAP as usize) as i32;

        let slot = evaluations.entry(Category::Medical).or_default();
        slot.score -= score_delta;
        slot.factors.push(Factor {
            name: CONDITIONS_FACTOR_NAME.to_string(),
            category: Category::Medical,
            impact,
            description: format!("Having {count} chronic conditions increases biological age"),
            confidence: self.conditions_confidence,
        });
    }
}

fn score_question(
    rules: &QuestionRules,
    answers: &AnswerSet,
    evaluations: &mut BTreeMap<Category, CategoryEvaluation>,
) {
    let Some(value) = answers.scalar(rules.question) else {
        return;
    };
    let Some(option) = rules.options.iter().find(|option| option.value == value) else {
        return;
    };
    if let Some(gate) = rules.gate {
        let open = answers
            .scalar(gate.question)
            .map_or(false, |value| value != gate.differs_from);
        if !open {
            return;
        }
    }

    let slot = evaluations.entry(rules.category).or_default();
    slot.score += option.score_delta;
    slot.factors.push(Factor {
        name: option.name.to_string(),
        category: rules.category,
        impact: option.impact,
        description: option.description.to_string(),
        confidence: rules.confidence,
    });
}
