use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindwell_core::models::symptom::SymptomFlags;

/// Risk tier derived from the symptom checklist count.
///
/// The three tiers partition [0, 7] contiguously; out-of-range counts clamp
/// to the nearest boundary tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

const LOW_RECOMMENDATIONS: [&str; 4] = [
    "Keep a regular daily routine and get enough sleep",
    "Exercise moderately, at least 150 minutes of moderate activity per week",
    "Stay socially connected and talk with friends and family",
    "Practice mindfulness meditation or relaxation techniques",
];

// Shown after the full low-tier list.
const MEDIUM_ADDITIONS: [&str; 4] = [
    "Consider seeing a counselor for preventive support",
    "Use cognitive behavioral therapy (CBT) self-help resources",
    "Schedule regular mental health check-ins",
    "Ask your family doctor for an evaluation if needed",
];

const HIGH_RECOMMENDATIONS: [&str; 6] = [
    "Consult a psychiatrist or mental health professional immediately",
    "Consider medication, such as an SSRI antidepressant",
    "Start professional psychotherapy (CBT, interpersonal therapy, or similar)",
    "Build a support network and let family or friends know",
    "Make a safety plan and seek help immediately if thoughts of self-harm appear",
    "Follow up regularly to monitor symptom changes",
];

/// Crisis resources shown alongside high-risk results.
pub const CRISIS_RESOURCES: [&str; 3] = [
    "National mental health helpline: 400-161-9995",
    "Beijing crisis intervention hotline: 010-82951332",
    "In an emergency, call 120 or 110",
];

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    /// Map a symptom count to its tier. Boundaries are inclusive on both
    /// ends; a count of exactly 2 or 4 belongs to the lower tier.
    pub fn classify(count: i32) -> Self {
        match count {
            i32::MIN..=2 => Self::Low,
            3..=4 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Classify directly from checklist flags.
    pub fn classify_flags(flags: &SymptomFlags) -> Self {
        Self::classify(flags.count())
    }

    /// Inclusive bounds of this tier's count range within [0, 7].
    pub fn bounds(self) -> (i32, i32) {
        match self {
            Self::Low => (0, 2),
            Self::Medium => (3, 4),
            Self::High => (5, 7),
        }
    }

    /// Stable identifier, used when a record stores its tier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Medium => "Medium risk",
            Self::High => "High risk",
        }
    }

    /// Ordered treatment recommendations for this tier.
    ///
    /// The medium tier extends the low tier's list with preventive-care
    /// items; the high tier is a distinct urgent-care list.
    pub fn recommendations(self) -> Vec<&'static str> {
        match self {
            Self::Low => LOW_RECOMMENDATIONS.to_vec(),
            Self::Medium => LOW_RECOMMENDATIONS
                .iter()
                .chain(MEDIUM_ADDITIONS.iter())
                .copied()
                .collect(),
            Self::High => HIGH_RECOMMENDATIONS.to_vec(),
        }
    }
}
