use crate::assessment::domain::Category;

/// Requires another question to be answered with anything except
/// `differs_from` before the option can score.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Gate {
    pub question: &'static str,
    pub differs_from: &'static str,
}

/// One scorable answer value. `impact` is in years of biological age with
/// negative values protective; `score_delta` feeds the category percentage.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FactorOption {
    pub value: &'static str,
    pub score_delta: i32,
    pub impact: f64,
    pub name: &'static str,
    pub description: &'static str,
}

/// All scorable values for one survey question. The confidence applies to
/// the extended model only; the baseline model assigns every factor the
/// default confidence instead.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QuestionRules {
    pub question: &'static str,
    pub category: Category,
    pub confidence: f64,
    pub gate: Option<Gate>,
    pub options: &'static [FactorOption],
}

/// Questions scored by both model versions, in evaluation order.
pub(crate) const CORE_QUESTIONS: &[QuestionRules] = &[
    QuestionRules {
        question: "gender",
        category: Category::Basic,
        confidence: 0.85,
        gate: None,
        options: &[FactorOption {
            value: "female",
            score_delta: 1,
            impact: -1.0,
            name: "Gender (Female)",
            description: "Women typically have slightly lower biological age due to hormonal factors",
        }],
    },
    QuestionRules {
        question: "diet-type",
        category: Category::Diet,
        confidence: 0.70,
        gate: None,
        options: &[
            FactorOption {
                value: "mediterranean",
                score_delta: 2,
                impact: -3.0,
                name: "Mediterranean Diet",
                description: "Mediterranean diet is associated with longevity and reduced disease risk",
            },
            FactorOption {
                value: "vegetarian",
                score_delta: 1,
                impact: -1.0,
                name: "Vegetarian Diet",
                description: "Vegetarian diets may contribute to slightly lower biological age",
            },
            FactorOption {
                value: "vegan",
                score_delta: 1,
                impact: -1.0,
                name: "Vegan Diet",
                description: "Plant-based diets can reduce risk of several chronic diseases",
            },
            FactorOption {
                value: "paleo",
                score_delta: 1,
                impact: -1.0,
                name: "Paleo Diet",
                description: "Whole food based diets can improve certain health markers",
            },
            FactorOption {
                value: "carnivore",
                score_delta: -1,
                impact: 1.0,
                name: "Carnivore Diet",
                description: "Very high animal product consumption may increase certain health risks",
            },
        ],
    },
    QuestionRules {
        question: "diet-quality",
        category: Category::Diet,
        confidence: 0.80,
        gate: None,
        options: &[
            FactorOption {
                value: "poor",
                score_delta: -2,
                impact: 3.0,
                name: "Poor Diet Quality",
                description: "Poor diet quality adds approximately 3 years to biological age",
            },
            FactorOption {
                value: "good",
                score_delta: 1,
                impact: -2.0,
                name: "Good Diet Quality",
                description: "Good diet quality reduces biological age by approximately 2 years",
            },
            FactorOption {
                value: "excellent",
                score_delta: 2,
                impact: -3.0,
                name: "Excellent Diet Quality",
                description: "Excellent diet quality significantly reduces biological age",
            },
        ],
    },
    QuestionRules {
        question: "processed-food",
        category: Category::Diet,
        confidence: 0.75,
        gate: None,
        options: &[
            FactorOption {
                value: "high",
                score_delta: -2,
                impact: 2.5,
                name: "High Processed Food Intake",
                description: "High processed food consumption accelerates aging and increases disease risk",
            },
            FactorOption {
                value: "moderate",
                score_delta: -1,
                impact: 1.0,
                name: "Moderate Processed Food",
                description: "Moderate processed food intake slightly increases biological age",
            },
            FactorOption {
                value: "low",
                score_delta: 1,
                impact: -1.0,
                name: "Low Processed Food",
                description: "Low processed food intake supports healthy aging",
            },
            FactorOption {
                value: "none",
                score_delta: 2,
                impact: -2.0,
                name: "No Processed Foods",
                description: "Avoiding processed foods can significantly reduce biological age",
            },
        ],
    },
    QuestionRules {
        question: "sugar-intake",
        category: Category::Diet,
        confidence: 0.75,
        gate: None,
        options: &[
            FactorOption {
                value: "high",
                score_delta: -2,
                impact: 2.0,
                name: "High Sugar Intake",
                description: "High sugar intake accelerates aging processes through glycation",
            },
            FactorOption {
                value: "moderate",
                score_delta: -1,
                impact: 1.0,
                name: "Moderate Sugar Intake",
                description: "Moderate sugar consumption slightly increases biological age",
            },
            FactorOption {
                value: "low",
                score_delta: 1,
                impact: -1.0,
                name: "Low Sugar Intake",
                description: "Limiting sugar helps reduce inflammation and supports healthy aging",
            },
            FactorOption {
                value: "none",
                score_delta: 2,
                impact: -2.0,
                name: "No Added Sugar",
                description: "Avoiding added sugar helps prevent cellular damage and aging",
            },
        ],
    },
    QuestionRules {
        question: "water-intake",
        category: Category::Diet,
        confidence: 0.70,
        gate: None,
        options: &[
            FactorOption {
                value: "low",
                score_delta: -1,
                impact: 1.0,
                name: "Low Water Intake",
                description: "Insufficient hydration can accelerate aging processes",
            },
            FactorOption {
                value: "optimal",
                score_delta: 1,
                impact: -1.0,
                name: "Optimal Water Intake",
                description: "Proper hydration supports cellular function and healthy aging",
            },
            FactorOption {
                value: "high",
                score_delta: 1,
                impact: -1.0,
                name: "High Water Intake",
                description: "Good hydration supports detoxification and cellular health",
            },
        ],
    },
    QuestionRules {
        question: "fasting",
        category: Category::Diet,
        confidence: 0.65,
        gate: None,
        options: &[FactorOption {
            value: "yes",
            score_delta: 1,
            impact: -1.5,
            name: "Intermittent Fasting",
            description: "Intermittent fasting may trigger cellular repair mechanisms and slow aging",
        }],
    },
    QuestionRules {
        question: "exercise",
        category: Category::Activity,
        confidence: 0.85,
        gate: None,
        options: &[
            FactorOption {
                value: "none",
                score_delta: -2,
                impact: 2.0,
                name: "No Exercise",
                description: "Lack of exercise adds approximately 2 years to biological age",
            },
            FactorOption {
                value: "occasional",
                score_delta: -1,
                impact: -1.0,
                name: "Occasional Exercise",
                description: "Occasional exercise reduces biological age by approximately 1 year",
            },
            FactorOption {
                value: "regular",
                score_delta: 2,
                impact: -3.0,
                name: "Regular Exercise",
                description: "Regular exercise can reduce biological age by 3-5 years",
            },
            FactorOption {
                value: "daily",
                score_delta: 2,
                impact: -4.0,
                name: "Daily Exercise",
                description: "Daily exercise significantly reduces biological age",
            },
        ],
    },
    QuestionRules {
        question: "exercise-intensity",
        category: Category::Activity,
        confidence: 0.70,
        gate: Some(Gate {
            question: "exercise",
            differs_from: "none",
        }),
        options: &[
            FactorOption {
                value: "high",
                score_delta: 1,
                impact: -1.5,
                name: "High Intensity Exercise",
                description: "High intensity exercise can trigger additional longevity benefits",
            },
            FactorOption {
                value: "varied",
                score_delta: 2,
                impact: -2.0,
                name: "Varied Exercise Intensity",
                description: "Mixed intensity training provides comprehensive benefits",
            },
        ],
    },
    QuestionRules {
        question: "strength-training",
        category: Category::Activity,
        confidence: 0.75,
        gate: None,
        options: &[
            FactorOption {
                value: "occasional",
                score_delta: 1,
                impact: -1.0,
                name: "Occasional Strength Training",
                description: "Some strength training helps maintain muscle mass and metabolic health",
            },
            FactorOption {
                value: "regular",
                score_delta: 2,
                impact: -2.0,
                name: "Regular Strength Training",
                description: "Regular strength training significantly reduces biological age",
            },
            FactorOption {
                value: "frequent",
                score_delta: 2,
                impact: -2.5,
                name: "Frequent Strength Training",
                description: "Frequent strength training helps preserve muscle and bone density",
            },
        ],
    },
    QuestionRules {
        question: "daily-movement",
        category: Category::Activity,
        confidence: 0.75,
        gate: None,
        options: &[
            FactorOption {
                value: "sedentary",
                score_delta: -2,
                impact: 2.0,
                name: "Sedentary Lifestyle",
                description: "Prolonged sitting accelerates aging regardless of exercise",
            },
            FactorOption {
                value: "low",
                score_delta: -1,
                impact: 1.0,
                name: "Low Daily Movement",
                description: "Limited daily movement slightly increases biological age",
            },
            FactorOption {
                value: "moderate",
                score_delta: 1,
                impact: -1.0,
                name: "Moderate Daily Movement",
                description: "Regular walking and standing throughout the day supports healthy aging",
            },
            FactorOption {
                value: "high",
                score_delta: 2,
                impact: -2.0,
                name: "High Daily Movement",
                description: "Frequent movement throughout the day significantly reduces biological age",
            },
        ],
    },
    QuestionRules {
        question: "smoker",
        category: Category::Lifestyle,
        confidence: 0.95,
        gate: None,
        options: &[
            FactorOption {
                value: "yes",
                score_delta: -5,
                impact: 10.0,
                name: "Current Smoker",
                description: "Smoking adds approximately 10 years to biological age",
            },
            FactorOption {
                value: "former",
                score_delta: -1,
                impact: 2.0,
                name: "Former Smoker",
                description: "Former smoking history adds approximately 2 years to biological age",
            },
        ],
    },
    QuestionRules {
        question: "alcohol",
        category: Category::Lifestyle,
        confidence: 0.85,
        gate: None,
        options: &[
            FactorOption {
                value: "none",
                score_delta: 1,
                impact: -1.0,
                name: "No Alcohol",
                description: "Avoiding alcohol can reduce biological age",
            },
            FactorOption {
                value: "moderate",
                score_delta: -1,
                impact: 1.0,
                name: "Moderate Alcohol",
                description: "Moderate alcohol may slightly increase biological age",
            },
            FactorOption {
                value: "heavy",
                score_delta: -3,
                impact: 5.0,
                name: "Heavy Alcohol Consumption",
                description: "Heavy alcohol consumption significantly increases biological age",
            },
            FactorOption {
                value: "excessive",
                score_delta: -4,
                impact: 7.0,
                name: "Excessive Alcohol",
                description: "Excessive alcohol consumption substantially accelerates aging",
            },
        ],
    },
    QuestionRules {
        question: "sleep",
        category: Category::Lifestyle,
        confidence: 0.85,
        gate: None,
        options: &[
            FactorOption {
                value: "less",
                score_delta: -2,
                impact: 3.0,
                name: "Insufficient Sleep",
                description: "Less than 6 hours of sleep adds approximately 3 years to biological age",
            },
            FactorOption {
                value: "optimal",
                score_delta: 2,
                impact: -2.0,
                name: "Optimal Sleep",
                description: "Optimal sleep duration reduces biological age by approximately 2 years",
            },
            FactorOption {
                value: "more",
                score_delta: -1,
                impact: 1.0,
                name: "Excessive Sleep",
                description: "Excessive sleep may slightly increase biological age",
            },
        ],
    },
    QuestionRules {
        question: "sleep-quality",
        category: Category::Lifestyle,
        confidence: 0.75,
        gate: None,
        options: &[
            FactorOption {
                value: "poor",
                score_delta: -2,
                impact: 2.0,
                name: "Poor Sleep Quality",
                description: "Poor sleep quality accelerates cellular aging processes",
            },
            FactorOption {
                value: "good",
                score_delta: 1,
                impact: -1.0,
                name: "Good Sleep Quality",
                description: "Good sleep quality supports cellular repair and healthy aging",
            },
        ],
    },
    QuestionRules {
        question: "stress",
        category: Category::Lifestyle,
        confidence: 0.80,
        gate: None,
        options: &[
            FactorOption {
                value: "low",
                score_delta: 2,
                impact: -2.0,
                name: "Low Stress",
                description: "Low stress levels support healthy aging and cellular function",
            },
            FactorOption {
                value: "high",
                score_delta: -2,
                impact: 3.0,
                name: "High Stress",
                description: "Chronic high stress accelerates aging through inflammation and hormonal impacts",
            },
            FactorOption {
                value: "severe",
                score_delta: -3,
                impact: 5.0,
                name: "Severe Stress",
                description: "Severe chronic stress significantly increases biological age",
            },
        ],
    },
    QuestionRules {
        question: "social",
        category: Category::Lifestyle,
        confidence: 0.80,
        gate: None,
        options: &[
            FactorOption {
                value: "isolated",
                score_delta: -2,
                impact: 4.0,
                name: "Social Isolation",
                description: "Social isolation can significantly increase biological age",
            },
            FactorOption {
                value: "limited",
                score_delta: -1,
                impact: 1.0,
                name: "Limited Social Connections",
                description: "Limited social interaction slightly increases biological age",
            },
            FactorOption {
                value: "moderate",
                score_delta: 1,
                impact: -1.0,
                name: "Moderate Social Connections",
                description: "Regular social interaction supports healthy aging",
            },
            FactorOption {
                value: "strong",
                score_delta: 2,
                impact: -2.5,
                name: "Strong Social Network",
                description: "Strong social connections significantly reduce biological age",
            },
        ],
    },
    QuestionRules {
        question: "mental-activity",
        category: Category::Lifestyle,
        confidence: 0.70,
        gate: None,
        options: &[
            FactorOption {
                value: "low",
                score_delta: -1,
                impact: 1.5,
                name: "Low Mental Stimulation",
                description: "Limited mental challenges may increase cognitive aging",
            },
            FactorOption {
                value: "moderate",
                score_delta: 1,
                impact: -1.0,
                name: "Moderate Mental Stimulation",
                description: "Regular mental challenges support cognitive health",
            },
            FactorOption {
                value: "high",
                score_delta: 2,
                impact: -2.0,
                name: "High Mental Stimulation",
                description: "Frequent learning and mental challenges reduce cognitive aging",
            },
        ],
    },
    QuestionRules {
        question: "mindfulness",
        category: Category::Lifestyle,
        confidence: 0.70,
        gate: None,
        options: &[
            FactorOption {
                value: "occasional",
                score_delta: 1,
                impact: -0.5,
                name: "Occasional Mindfulness",
                description: "Some meditation practice can slightly reduce biological age",
            },
            FactorOption {
                value: "regular",
                score_delta: 2,
                impact: -1.5,
                name: "Regular Mindfulness",
                description: "Regular meditation reduces stress and supports healthy aging",
            },
            FactorOption {
                value: "daily",
                score_delta: 2,
                impact: -2.0,
                name: "Daily Mindfulness",
                description: "Daily meditation practice significantly reduces biological age",
            },
        ],
    },
    QuestionRules {
        question: "outdoor-time",
        category: Category::Environment,
        confidence: 0.70,
        gate: None,
        options: &[
            FactorOption {
                value: "minimal",
                score_delta: -1,
                impact: 1.0,
                name: "Minimal Outdoor Time",
                description: "Limited time outdoors may increase biological age",
            },
            FactorOption {
                value: "significant",
                score_delta: 1,
                impact: -1.0,
                name: "Significant Outdoor Time",
                description: "Regular time outdoors supports vitamin D levels and circadian rhythm",
            },
            FactorOption {
                value: "extensive",
                score_delta: 2,
                impact: -1.5,
                name: "Extensive Outdoor Time",
                description: "Extensive time outdoors promotes overall health",
            },
        ],
    },
    QuestionRules {
        question: "nature-exposure",
        category: Category::Environment,
        confidence: 0.65,
        gate: None,
        options: &[
            FactorOption {
                value: "rare",
                score_delta: -1,
                impact: 1.0,
                name: "Rare Nature Exposure",
                description: "Limited nature contact may increase stress and biological age",
            },
            FactorOption {
                value: "frequent",
                score_delta: 1,
                impact: -1.0,
                name: "Frequent Nature Exposure",
                description: "Regular nature exposure reduces stress and supports health",
            },
            FactorOption {
                value: "immersive",
                score_delta: 2,
                impact: -2.0,
                name: "Immersive Nature Exposure",
                description: "Living in natural settings significantly reduces biological age",
            },
        ],
    },
    QuestionRules {
        question: "sun-exposure",
        category: Category::Environment,
        confidence: 0.65,
        gate: None,
        options: &[
            FactorOption {
                value: "minimal",
                score_delta: -1,
                impact: 1.0,
                name: "Minimal Sun Exposure",
                description: "Insufficient sun exposure may lead to vitamin D deficiency",
            },
            FactorOption {
                value: "moderate-protected",
                score_delta: 1,
                impact: -1.0,
                name: "Moderate Sun with Protection",
                description: "Balanced sun exposure with protection optimizes vitamin D while preventing damage",
            },
            FactorOption {
                value: "high-protected",
                score_delta: 1,
                impact: -1.0,
                name: "High Sun Exposure with Protection",
                description: "Regular sun exposure with protection balances benefits and risks",
            },
            FactorOption {
                value: "high-unprotected",
                score_delta: -1,
                impact: 2.0,
                name: "High Sun Exposure without Protection",
                description: "Excessive unprotected sun exposure accelerates skin aging",
            },
        ],
    },
    QuestionRules {
        question: "air-quality",
        category: Category::Environment,
        confidence: 0.75,
        gate: None,
        options: &[
            FactorOption {
                value: "poor",
                score_delta: -2,
                impact: 3.0,
                name: "Poor Air Quality",
                description: "Poor air quality significantly increases oxidative stress and aging",
            },
            FactorOption {
                value: "moderate",
                score_delta: -1,
                impact: 1.0,
                name: "Moderate Air Quality",
                description: "Moderate air pollution can slightly increase biological age",
            },
            FactorOption {
                value: "good",
                score_delta: 1,
                impact: -1.0,
                name: "Good Air Quality",
                description: "Clean air reduces respiratory stress and supports healthy aging",
            },
            FactorOption {
                value: "excellent",
                score_delta: 2,
                impact: -2.0,
                name: "Excellent Air Quality",
                description: "Pristine air quality significantly reduces biological age",
            },
        ],
    },
    QuestionRules {
        question: "screen-time",
        category: Category::Environment,
        confidence: 0.65,
        gate: None,
        options: &[
            FactorOption {
                value: "low",
                score_delta: 1,
                impact: -1.0,
                name: "Low Screen Time",
                description: "Limited screen exposure supports healthy sleep and reduces eye strain",
            },
            FactorOption {
                value: "high",
                score_delta: -1,
                impact: 1.0,
                name: "High Screen Time",
                description: "Extended screen time may disrupt sleep and increase strain",
            },
            FactorOption {
                value: "excessive",
                score_delta: -2,
                impact: 2.0,
                name: "Excessive Screen Time",
                description: "Excessive screen exposure disrupts circadian rhythm and may accelerate aging",
            },
        ],
    },
    QuestionRules {
        question: "blue-light",
        category: Category::Environment,
        confidence: 0.60,
        gate: None,
        options: &[FactorOption {
            value: "yes",
            score_delta: 1,
            impact: -0.5,
            name: "Blue Light Protection",
            description: "Using blue light protection helps maintain healthy sleep cycles",
        }],
    },
    QuestionRules {
        question: "medications",
        category: Category::Medical,
        confidence: 0.80,
        gate: None,
        options: &[
            FactorOption {
                value: "one",
                score_delta: -1,
                impact: 1.0,
                name: "Regular Medication Use",
                description: "Regular medication use may slightly increase biological age",
            },
            FactorOption {
                value: "few",
                score_delta: -1,
                impact: 2.0,
                name: "Multiple Medications",
                description: "Using multiple medications may increase biological age",
            },
            FactorOption {
                value: "multiple",
                score_delta: -2,
                impact: 3.0,
                name: "Many Medications",
                description: "Taking numerous medications can significantly increase biological age",
            },
        ],
    },
    QuestionRules {
        question: "family-longevity",
        category: Category::Medical,
        confidence: 0.80,
        gate: None,
        options: &[
            FactorOption {
                value: "short",
                score_delta: -1,
                impact: 2.0,
                name: "Short Family Longevity",
                description: "Family history of shorter lifespan may indicate genetic factors",
            },
            FactorOption {
                value: "long",
                score_delta: 2,
                impact: -3.0,
                name: "Long Family Longevity",
                description: "Family history of longevity suggests favorable genetic factors",
            },
        ],
    },
    QuestionRules {
        question: "checkups",
        category: Category::Medical,
        confidence: 0.70,
        gate: None,
        options: &[
            FactorOption {
                value: "never",
                score_delta: -1,
                impact: 1.0,
                name: "No Regular Checkups",
                description: "Lack of preventive care may allow health issues to progress",
            },
            FactorOption {
                value: "regular",
                score_delta: 1,
                impact: -1.0,
                name: "Regular Checkups",
                description: "Regular preventive care supports early intervention",
            },
            FactorOption {
                value: "comprehensive",
                score_delta: 2,
                impact: -2.0,
                name: "Comprehensive Health Monitoring",
                description: "Detailed health tracking allows for optimal intervention",
            },
        ],
    },
    QuestionRules {
        question: "supplements",
        category: Category::Medical,
        confidence: 0.60,
        gate: None,
        options: &[
            FactorOption {
                value: "moderate",
                score_delta: 1,
                impact: -1.0,
                name: "Targeted Supplementation",
                description: "Strategic supplement use may address specific deficiencies",
            },
            FactorOption {
                value: "extensive",
                score_delta: 1,
                impact: -1.5,
                name: "Comprehensive Supplementation",
                description: "Comprehensive supplement regimen may support cellular health",
            },
        ],
    },
];

/// Questions scored only by the extended model.
pub(crate) const EXTENDED_QUESTIONS: &[QuestionRules] = &[
    QuestionRules {
        question: "anxiety",
        category: Category::MentalHealth,
        confidence: 0.75,
        gate: None,
        options: &[
            FactorOption {
                value: "mild",
                score_delta: -1,
                impact: 1.0,
                name: "Mild Anxiety",
                description: "Mild anxiety has a modest effect on stress hormones and aging",
            },
            FactorOption {
                value: "moderate",
                score_delta: -2,
                impact: 2.0,
                name: "Moderate Anxiety",
                description: "Ongoing anxiety elevates stress hormones and accelerates cellular aging",
            },
            FactorOption {
                value: "severe",
                score_delta: -3,
                impact: 4.0,
                name: "Severe Anxiety",
                description: "Severe anxiety substantially increases inflammation and biological age",
            },
        ],
    },
    QuestionRules {
        question: "depression",
        category: Category::MentalHealth,
        confidence: 0.75,
        gate: None,
        options: &[
            FactorOption {
                value: "mild",
                score_delta: -1,
                impact: 1.5,
                name: "Mild Depression",
                description: "Mild depression can modestly affect sleep, activity, and aging",
            },
            FactorOption {
                value: "moderate",
                score_delta: -2,
                impact: 3.0,
                name: "Moderate Depression",
                description: "Depression affects sleep, inflammation, and healthy behaviors",
            },
            FactorOption {
                value: "severe",
                score_delta: -3,
                impact: 5.0,
                name: "Severe Depression",
                description: "Severe depression significantly increases biological age through multiple pathways",
            },
        ],
    },
    QuestionRules {
        question: "mental-health-condition",
        category: Category::MentalHealth,
        confidence: 0.75,
        gate: None,
        options: &[
            FactorOption {
                value: "managed",
                score_delta: -1,
                impact: 1.0,
                name: "Managed Mental Health Condition",
                description: "A well managed mental health condition has a limited effect on aging",
            },
            FactorOption {
                value: "unmanaged",
                score_delta: -2,
                impact: 4.0,
                name: "Unmanaged Mental Health Condition",
                description: "An untreated mental health condition can significantly increase biological age",
            },
        ],
    },
    QuestionRules {
        question: "close-relationships",
        category: Category::SocialConnection,
        confidence: 0.70,
        gate: None,
        options: &[
            FactorOption {
                value: "none",
                score_delta: -2,
                impact: 2.0,
                name: "No Close Relationships",
                description: "Lacking close relationships increases stress and biological age",
            },
            FactorOption {
                value: "few",
                score_delta: -1,
                impact: 1.0,
                name: "Few Close Relationships",
                description: "Few close relationships slightly increase biological age",
            },
            FactorOption {
                value: "several",
                score_delta: 1,
                impact: -1.0,
                name: "Several Close Relationships",
                description: "A small circle of close relationships supports healthy aging",
            },
            FactorOption {
                value: "many",
                score_delta: 2,
                impact: -1.5,
                name: "Many Close Relationships",
                description: "A wide circle of close relationships significantly supports longevity",
            },
        ],
    },
    QuestionRules {
        question: "community-involvement",
        category: Category::SocialConnection,
        confidence: 0.65,
        gate: None,
        options: &[
            FactorOption {
                value: "none",
                score_delta: -1,
                impact: 1.0,
                name: "No Community Involvement",
                description: "No community engagement may increase isolation and biological age",
            },
            FactorOption {
                value: "occasional",
                score_delta: 1,
                impact: -1.0,
                name: "Occasional Community Involvement",
                description: "Occasional community engagement supports purpose and connection",
            },
            FactorOption {
                value: "active",
                score_delta: 2,
                impact: -2.0,
                name: "Active Community Involvement",
                description: "Active community engagement significantly supports healthy aging",
            },
        ],
    },
];

/// BMI bands matched in order; `max` is exclusive and `None` is unbounded.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BmiBand {
    pub min: f64,
    pub max: Option<f64>,
    pub score_delta: i32,
    pub impact: f64,
    pub name: &'static str,
    pub description: &'static str,
}

pub(crate) const BMI_BANDS: &[BmiBand] = &[
    BmiBand {
        min: f64::NEG_INFINITY,
        max: Some(18.5),
        score_delta: -1,
        impact: 2.0,
        name: "BMI (Underweight)",
        description: "Being underweight can increase health risks and may add years to biological age",
    },
    BmiBand {
        min: 18.5,
        max: Some(25.0),
        score_delta: 2,
        impact: -2.0,
        name: "BMI (Normal)",
        description: "Maintaining a healthy weight reduces your biological age",
    },
    BmiBand {
        min: 25.0,
        max: Some(30.0),
        score_delta: 0,
        impact: 1.0,
        name: "BMI (Overweight)",
        description: "Being overweight can slightly increase biological age",
    },
    BmiBand {
        min: 30.0,
        max: None,
        score_delta: -2,
        impact: 4.0,
        name: "BMI (Obese)",
        description: "Obesity significantly increases biological age and disease risk",
    },
];

pub(crate) const BMI_CONFIDENCE: f64 = 0.85;

/// Each chronic condition contributes 1.5 years, capped at 6 years of impact
/// and 3 points of category score.
pub(crate) const CONDITION_YEARS_EACH: f64 = 1.5;
pub(crate) const CONDITION_IMPACT_CAP: f64 = 6.0;
pub(crate) const CONDITION_SCORE_CAP: i32 = 3;
pub(crate) const CONDITIONS_CONFIDENCE: f64 = 0.90;
pub(crate) const CONDITIONS_FACTOR_NAME: &str = "Chronic Health Conditions";
