use super::rec;
use crate::assessment::answers::AnswerSet;
use crate::assessment::domain::{
    EvidenceRating::{Emerging, Moderate, Strong},
    Priority::{High, Low, Medium},
    Recommendation,
    TimeToEffect::{LongTerm, MediumTerm, Ongoing, ShortTerm},
};

/// Answer-driven recommendations, in generation order: diet, exercise,
/// lifestyle, environment, medical, mental health, social connection.
pub(crate) fn answer_rules(answers: &AnswerSet) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    // Diet and nutrition
    if answers.matches("diet-quality", "poor") {
        recommendations.push(rec(
            "Diet",
            "Improve your overall diet quality by building meals around vegetables, fruits, legumes, whole grains, and lean proteins. Research shows poor diet quality adds approximately 3 years to biological age.",
            High,
            Strong,
            MediumTerm,
        ));
    }
    if answers.matches("processed-food", "high") {
        recommendations.push(rec(
            "Diet",
            "Replace processed foods with whole food alternatives wherever possible. High intake of ultra-processed food is associated with accelerated aging and increased disease risk.",
            Medium,
            Strong,
            ShortTerm,
        ));
    }
    if answers.matches("sugar-intake", "high") {
        recommendations.push(rec(
            "Diet",
            "Cut back on added sugar in drinks and snacks. High sugar intake drives glycation, a process that damages proteins and accelerates cellular aging.",
            Medium,
            Moderate,
            ShortTerm,
        ));
    }
    if answers.matches("water-intake", "low") {
        recommendations.push(rec(
            "Diet",
            "Increase your daily water intake. Even mild chronic dehydration is linked to markers of faster aging.",
            Low,
            Emerging,
            ShortTerm,
        ));
    }

    // Exercise
    if answers.matches("exercise", "none") {
        recommendations.push(rec(
            "Exercise",
            "Start a regular exercise routine, beginning with brisk walking for 30 minutes most days. Lack of exercise adds approximately 2 years to biological age, and benefits begin within weeks of starting.",
            High,
            Strong,
            MediumTerm,
        ));
    }
    if answers.matches("exercise", "occasional") {
        recommendations.push(rec(
            "Exercise",
            "Build your occasional activity into a consistent routine of at least 150 minutes of moderate exercise per week. Consistency matters more than intensity for longevity benefits.",
            Medium,
            Strong,
            MediumTerm,
        ));
    }
    if answers.matches("strength-training", "none") {
        recommendations.push(rec(
            "Exercise",
            "Add strength training at least twice per week. Preserving muscle mass is one of the strongest predictors of healthy aging.",
            Medium,
            Strong,
            MediumTerm,
        ));
    }
    if answers.matches("daily-movement", "sedentary") {
        recommendations.push(rec(
            "Exercise",
            "Break up long sitting periods with short movement breaks every hour. Prolonged sitting accelerates aging even in people who exercise regularly.",
            Medium,
            Strong,
            ShortTerm,
        ));
    }

    // Lifestyle
    if answers.matches("smoker", "yes") {
        recommendations.push(rec(
            "Lifestyle",
            "Quitting smoking is the single most impactful change you can make. Smoking adds approximately 10 years to biological age, and cardiovascular risk starts falling within months of quitting.",
            High,
            Strong,
            MediumTerm,
        ));
    }
    if answers.matches("smoker", "former") {
        recommendations.push(rec(
            "Lifestyle",
            "Stay smoke-free. Your risk profile continues to improve with every year since quitting.",
            Low,
            Strong,
            Ongoing,
        ));
    }
    if answers.matches_any("alcohol", &["heavy", "excessive"]) {
        recommendations.push(rec(
            "Lifestyle",
            "Reduce your alcohol consumption substantially. Heavy drinking accelerates aging of the brain, liver, and cardiovascular system.",
            High,
            Strong,
            ShortTerm,
        ));
    }
    if answers.matches("sleep", "less") {
        recommendations.push(rec(
            "Lifestyle",
            "Extend your sleep to at least 7 hours per night. Less than 6 hours of sleep adds approximately 3 years to biological age and undermines nearly every other health habit.",
            High,
            Strong,
            ShortTerm,
        ));
    }
    if answers.matches("sleep-quality", "poor") {
        recommendations.push(rec(
            "Lifestyle",
            "Improve your sleep quality with a consistent schedule, a dark cool bedroom, and no screens before bed. Poor sleep quality accelerates cellular aging processes.",
            Medium,
            Strong,
            ShortTerm,
        ));
    }

    // Environment
    if answers.matches("air-quality", "poor") {
        recommendations.push(rec(
            "Environment",
            "Reduce your exposure to air pollution with indoor air filtration and by avoiding outdoor exercise during high-pollution periods. Poor air quality significantly increases oxidative stress.",
            Medium,
            Strong,
            MediumTerm,
        ));
    }
    if answers.matches("outdoor-time", "minimal") {
        recommendations.push(rec(
            "Environment",
            "Spend more time outdoors in daylight. Regular outdoor time supports vitamin D levels, circadian rhythm, and stress recovery.",
            Medium,
            Moderate,
            ShortTerm,
        ));
    }
    if answers.matches("sun-exposure", "high-unprotected") {
        recommendations.push(rec(
            "Environment",
            "Use sun protection during extended sun exposure. Unprotected UV exposure accelerates skin aging and increases cancer risk.",
            Medium,
            Strong,
            ShortTerm,
        ));
    }

    // Medical
    if answers.matches("checkups", "never") {
        recommendations.push(rec(
            "Medical",
            "Schedule regular preventive health checkups. Early detection of developing conditions is one of the most reliable ways to protect long-term health.",
            Medium,
            Strong,
            LongTerm,
        ));
    }
    if answers.items("conditions").map_or(false, |items| !items.is_empty()) {
        recommendations.push(rec(
            "Medical",
            "Work closely with your healthcare provider to keep your chronic conditions well managed. Good management substantially reduces their impact on biological aging.",
            High,
            Strong,
            Ongoing,
        ));
    }

    // Mental health
    if answers.matches_any("stress", &["high", "severe"]) {
        recommendations.push(rec(
            "Mental Health",
            "Implement evidence-based stress reduction techniques such as deep breathing, meditation, yoga, or spending time in nature. Research shows chronic stress accelerates cellular aging through inflammation, oxidative stress, and telomere shortening.",
            High,
            Strong,
            ShortTerm,
        ));
    }
    if answers.matches_any("anxiety", &["moderate", "severe"]) {
        recommendations.push(rec(
            "Mental Health",
            "Consider anxiety management strategies such as cognitive-behavioral techniques, mindfulness, and regular physical activity. Studies show that chronic anxiety increases inflammation markers associated with accelerated aging.",
            High,
            Strong,
            MediumTerm,
        ));
    }
    if answers.matches_any("depression", &["moderate", "severe"]) {
        recommendations.push(rec(
            "Mental Health",
            "Seek professional support for depression management. Untreated depression is linked to increased biological aging through multiple pathways including inflammation, oxidative stress, and altered cellular function.",
            High,
            Strong,
            MediumTerm,
        ));
    }
    if answers.matches("mental-health-condition", "unmanaged") {
        recommendations.push(rec(
            "Mental Health",
            "Prioritize professional treatment for your mental health condition. Research shows well-managed mental health conditions have significantly less impact on biological aging compared to untreated conditions.",
            High,
            Moderate,
            MediumTerm,
        ));
    }
    if answers.matches("mindfulness", "none") || answers.scalar("mindfulness").is_none() {
        recommendations.push(rec(
            "Mental Health",
            "Start a simple daily meditation practice for 5-10 minutes. Clinical studies demonstrate that regular meditation can reduce biological age by lowering stress hormones, improving immune function, and potentially slowing cellular aging.",
            Medium,
            Moderate,
            MediumTerm,
        ));
    }
    if should_recommend_sleep_improvement(answers) {
        recommendations.push(rec(
            "Mental Health",
            "Prioritize improving your sleep through consistent sleep scheduling, creating a relaxing bedtime routine, and limiting screen time before bed. Poor sleep quality compounds mental health stressors and accelerates biological aging.",
            High,
            Strong,
            ShortTerm,
        ));
    }
    if answers.matches_any("screen-time", &["high", "excessive"]) {
        recommendations.push(rec(
            "Mental Health",
            "Implement regular digital detox periods and set boundaries around technology use. Excessive screen time is associated with increased stress, sleep disruption, and reduced mental wellbeing, all of which can accelerate aging.",
            Medium,
            Moderate,
            ShortTerm,
        ));
    }

    // Social connection
    if answers.matches_any("social", &["isolated", "limited"]) {
        recommendations.push(rec(
            "Social Connection",
            "Prioritize building stronger social connections through community activities, volunteering, classes, or reconnecting with friends and family. Research shows social isolation has health impacts comparable to smoking 15 cigarettes daily.",
            High,
            Strong,
            LongTerm,
        ));
    }
    if answers.matches_any("close-relationships", &["none", "few"]) {
        recommendations.push(rec(
            "Social Connection",
            "Focus on developing deeper connections with a few key people rather than many superficial relationships. Studies show that quality of relationships has greater health benefits than quantity.",
            Medium,
            Moderate,
            LongTerm,
        ));
    }
    if answers.matches("community-involvement", "none")
        && answers.matches_any("social", &["isolated", "limited"])
    {
        recommendations.push(rec(
            "Social Connection",
            "Join a community group, class, or volunteer organization related to your interests. Community engagement provides purpose, social connection, and practical support—all factors that contribute to healthier aging.",
            Medium,
            Moderate,
            MediumTerm,
        ));
    }
    if answers.matches("social", "limited") && answers.matches("screen-time", "high") {
        recommendations.push(rec(
            "Social Connection",
            "Balance digital communication with in-person social interaction. Research indicates that face-to-face connection provides greater health benefits than online-only social engagement.",
            Medium,
            Emerging,
            MediumTerm,
        ));
    }

    recommendations
}

/// Sleep advice escalates when poor sleep coincides with mental load.
fn should_recommend_sleep_improvement(answers: &AnswerSet) -> bool {
    let poor_sleep = answers.matches("sleep", "less") || answers.matches("sleep-quality", "poor");
    let mental_load =
        answers.matches("stress", "high") || answers.matches_any("anxiety", &["moderate", "severe"]);
    poor_sleep && mental_load
}

/// General advice used to top the list up to the minimum count.
pub(crate) fn general_pool() -> Vec<Recommendation> {
    vec![
        rec(
            "General Longevity",
            "Aim for consistency over perfection. Small habits sustained for years have a larger effect on biological age than short intense efforts.",
            Low,
            Strong,
            Ongoing,
        ),
        rec(
            "General Longevity",
            "Eat a varied, colorful diet rich in plants. Dietary diversity supports the gut microbiome, which plays a growing role in healthy aging research.",
            Low,
            Moderate,
            LongTerm,
        ),
        rec(
            "General Longevity",
            "Protect your daily sleep window. Consistent, sufficient sleep is a foundation that amplifies every other longevity habit.",
            Low,
            Strong,
            Ongoing,
        ),
        rec(
            "General Longevity",
            "Keep learning new skills. Cognitive challenge throughout life is associated with slower cognitive aging.",
            Low,
            Moderate,
            LongTerm,
        ),
        rec(
            "General Longevity",
            "Schedule time with people who matter to you. Strong relationships are among the most consistent predictors of long, healthy lives.",
            Low,
            Strong,
            Ongoing,
        ),
    ]
}
