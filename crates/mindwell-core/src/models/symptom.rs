use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The seven-item symptom checklist from the pathology analysis page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomFlags {
    pub mood: bool,
    pub sleep: bool,
    pub appetite: bool,
    pub energy: bool,
    pub concentration: bool,
    pub anxiety: bool,
    pub social: bool,
}

impl SymptomFlags {
    pub const FLAG_COUNT: usize = 7;

    /// Number of flags currently set.
    pub fn count(&self) -> i32 {
        [
            self.mood,
            self.sleep,
            self.appetite,
            self.energy,
            self.concentration,
            self.anxiety,
            self.social,
        ]
        .into_iter()
        .filter(|&set| set)
        .count() as i32
    }
}

/// A completed symptom checklist run with its derived risk tier.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomAssessment {
    pub id: Uuid,
    pub flags: SymptomFlags,
    pub count: i32,
    pub risk: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
