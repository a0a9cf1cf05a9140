use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Depression severity band derived from a PHQ-9 total score.
///
/// The five bands partition [0, 27] contiguously. Classification clamps
/// out-of-range totals to the nearest boundary band so a result view can
/// always render something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl SeverityBand {
    pub const ALL: [SeverityBand; 5] = [
        SeverityBand::Minimal,
        SeverityBand::Mild,
        SeverityBand::Moderate,
        SeverityBand::ModeratelySevere,
        SeverityBand::Severe,
    ];

    /// Map a PHQ-9 total to its band. Boundaries are inclusive on both ends;
    /// a total of exactly 4, 9, 14, or 19 belongs to the lower band.
    pub fn classify(total: i32) -> Self {
        match total {
            i32::MIN..=4 => Self::Minimal,
            5..=9 => Self::Mild,
            10..=14 => Self::Moderate,
            15..=19 => Self::ModeratelySevere,
            _ => Self::Severe,
        }
    }

    /// Inclusive bounds of this band's score range within [0, 27].
    pub fn bounds(self) -> (i32, i32) {
        match self {
            Self::Minimal => (0, 4),
            Self::Mild => (5, 9),
            Self::Moderate => (10, 14),
            Self::ModeratelySevere => (15, 19),
            Self::Severe => (20, 27),
        }
    }

    /// Stable identifier, used when a record stores its band.
    pub fn id(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::ModeratelySevere => "moderately_severe",
            Self::Severe => "severe",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::ModeratelySevere => "Moderately severe",
            Self::Severe => "Severe",
        }
    }

    /// Display color for the result card.
    pub fn color_token(self) -> &'static str {
        match self {
            Self::Minimal => "#10b981",
            Self::Mild => "#3b82f6",
            Self::Moderate => "#f59e0b",
            Self::ModeratelySevere => "#ef4444",
            Self::Severe => "#dc2626",
        }
    }

    /// Fixed guidance text shown with the result. The two most severe bands
    /// share wording and differ only in label and color.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::Minimal => {
                "Your depressive symptoms are minimal. Keep up your healthy \
                 routines and check in on your mental health periodically."
            }
            Self::Mild => {
                "You may have mild depressive symptoms. Consider getting more \
                 exercise, improving your sleep, and staying socially active. \
                 If symptoms persist, consider talking to a mental health \
                 professional."
            }
            Self::Moderate => {
                "You may have moderate depressive symptoms. We strongly \
                 recommend a consultation with a mental health professional \
                 for assessment and treatment. Cognitive behavioral therapy \
                 (CBT) or a psychiatric referral may help."
            }
            Self::ModeratelySevere | Self::Severe => {
                "Your symptoms are serious; please seek professional help \
                 immediately. Contact a psychiatrist, a counselor, or a \
                 mental health hotline. You do not have to face this alone, \
                 and professional treatment can significantly improve your \
                 condition."
            }
        }
    }
}
