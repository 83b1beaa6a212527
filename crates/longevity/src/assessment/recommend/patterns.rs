use crate::assessment::answers::AnswerSet;

/// A recognised lifestyle cluster and its combined advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PatternMatch {
    pub key: &'static str,
    pub advice: &'static str,
}

/// Checks the known lifestyle clusters in order and returns the first match,
/// so at most one personalised recommendation is produced.
pub(crate) fn identify(answers: &AnswerSet) -> Option<PatternMatch> {
    if answers.matches_any("stress", &["high", "severe"])
        && answers.matches_any("exercise", &["occasional", "none"])
        && answers.matches("sleep", "less")
        && answers.matches_any("screen-time", &["high", "excessive"])
    {
        return Some(PatternMatch {
            key: "busy-professional",
            advice: "Your profile suggests a busy, high-stress lifestyle with limited time for self-care. Consider time-efficient strategies like high-intensity interval training, meal preparation, and scheduled downtime to maximize health benefits with minimal time investment.",
        });
    }

    if answers.matches("social", "isolated")
        && answers.matches_any("stress", &["moderate", "high"])
        && (answers.matches("mental-activity", "low") || answers.scalar("mental-activity").is_none())
    {
        return Some(PatternMatch {
            key: "socially-isolated",
            advice: "Your profile indicates social isolation combined with mental and physical health impacts. Consider starting with low-pressure social activities built around your interests, which can simultaneously address multiple health factors.",
        });
    }

    if answers.matches_any("diet-quality", &["good", "excellent"])
        && answers.matches_any("exercise", &["none", "occasional"])
        && answers.matches_any("daily-movement", &["sedentary", "low"])
    {
        return Some(PatternMatch {
            key: "health-diet-sedentary",
            advice: "You appear to prioritize nutrition but have limited physical activity. While your diet is beneficial, research shows that even excellent nutrition cannot fully compensate for insufficient movement. Consider movement snacks throughout the day.",
        });
    }

    if answers.matches_any("exercise", &["regular", "daily"])
        && answers.matches_any("stress", &["high", "severe"])
        && (answers.matches("mindfulness", "none") || answers.scalar("mindfulness").is_none())
    {
        return Some(PatternMatch {
            key: "active-but-stressed",
            advice: "You maintain good physical activity but experience significant mental stress. Consider complementing your physical routine with mental wellness practices like mindfulness, which research shows can amplify the longevity benefits of exercise.",
        });
    }

    None
}
