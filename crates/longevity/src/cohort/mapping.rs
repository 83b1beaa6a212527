use super::normalizer::normalize_header;
use std::collections::HashMap;
use std::sync::OnceLock;

static COLUMN_MAP: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

pub(crate) fn question_for_normalized(normalized_header: &str) -> Option<&'static str> {
    column_map().get(normalized_header).copied()
}

/// Columns that label the row rather than answer a question.
pub(crate) fn is_respondent_column(normalized_header: &str) -> bool {
    matches!(
        normalized_header,
        "respondent" | "respondent id" | "participant" | "participant id" | "name" | "email"
    )
}

fn column_map() -> &'static HashMap<String, &'static str> {
    COLUMN_MAP.get_or_init(|| {
        const COLUMN_TO_QUESTION: &[(&str, &str)] = &[
            // Basic profile
            ("Age", "age"),
            ("Age (years)", "age"),
            ("Gender", "gender"),
            ("Sex", "gender"),
            ("Height", "height"),
            ("Height (cm)", "height"),
            ("Weight", "weight"),
            ("Weight (kg)", "weight"),
            // Diet & nutrition
            ("Diet", "diet-quality"),
            ("Diet Quality", "diet-quality"),
            ("Diet Type", "diet-type"),
            ("Processed Food", "processed-food"),
            ("Processed Food Intake", "processed-food"),
            ("Sugar Intake", "sugar-intake"),
            ("Water Intake", "water-intake"),
            ("Fasting", "fasting"),
            ("Intermittent Fasting", "fasting"),
            // Physical activity
            ("Exercise", "exercise"),
            ("Exercise Frequency", "exercise"),
            ("How often do you exercise?", "exercise"),
            ("Exercise Intensity", "exercise-intensity"),
            ("Strength Training", "strength-training"),
            ("Daily Movement", "daily-movement"),
            // Lifestyle
            ("Smoker", "smoker"),
            ("Smoking", "smoker"),
            ("Smoking Status", "smoker"),
            ("Alcohol", "alcohol"),
            ("Alcohol Consumption", "alcohol"),
            ("Sleep", "sleep"),
            ("Sleep Duration", "sleep"),
            ("Sleep Quality", "sleep-quality"),
            ("Stress", "stress"),
            ("Stress Level", "stress"),
            ("Social", "social"),
            ("Social Connections", "social"),
            ("Mental Activity", "mental-activity"),
            ("Mindfulness", "mindfulness"),
            // Mental wellbeing
            ("Anxiety", "anxiety"),
            ("Depression", "depression"),
            ("Mental Health Condition", "mental-health-condition"),
            // Social connection
            ("Close Relationships", "close-relationships"),
            ("Community Involvement", "community-involvement"),
            // Environment
            ("Outdoor Time", "outdoor-time"),
            ("Nature Exposure", "nature-exposure"),
            ("Sun Exposure", "sun-exposure"),
            ("Air Quality", "air-quality"),
            ("Screen Time", "screen-time"),
            ("Blue Light", "blue-light"),
            ("Blue Light Protection", "blue-light"),
            // Medical history
            ("Medications", "medications"),
            ("Conditions", "conditions"),
            ("Chronic Conditions", "conditions"),
            ("Health Conditions", "conditions"),
            ("Family Longevity", "family-longevity"),
            ("Checkups", "checkups"),
            ("Health Checkups", "checkups"),
            ("Supplements", "supplements"),
        ];

        COLUMN_TO_QUESTION
            .iter()
            .map(|(column, question)| (normalize_header(column), *question))
            .collect()
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(header: &str) -> Option<&'static str> {
    question_for_normalized(&normalize_header(header))
}
