use crate::Instrument;
use crate::scoring::{Item, ResponseRange};

/// The seven-item symptom self-check from the pathology analysis page.
/// Each item is a present/absent flag, rated 0 or 1.
pub struct SymptomChecklist7;

pub const ITEM_COUNT: usize = 7;

impl Instrument for SymptomChecklist7 {
    fn id(&self) -> &str {
        "symptom_checklist"
    }

    fn name(&self) -> &str {
        "Symptom Checklist"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let range = ResponseRange { min: 0, max: 1 };

            let prompts = [
                ("mood", "Low mood or irritability"),
                ("sleep", "Sleep disturbance (insomnia or hypersomnia)"),
                ("appetite", "Appetite change (increase or decrease)"),
                ("energy", "Low energy or fatigue"),
                ("concentration", "Difficulty concentrating"),
                ("anxiety", "Anxiety or tension"),
                ("social", "Social avoidance or withdrawal"),
            ];

            prompts
                .iter()
                .map(|(id, prompt)| Item {
                    id: id.to_string(),
                    prompt: prompt.to_string(),
                    range,
                })
                .collect()
        });
        &ITEMS
    }
}
