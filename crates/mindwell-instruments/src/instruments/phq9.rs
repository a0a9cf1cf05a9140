use crate::Instrument;
use crate::scoring::{Item, ResponseRange};

/// PHQ-9: Patient Health Questionnaire, nine-item depression module.
/// Each item rates symptom frequency over the past two weeks, 0–3.
pub struct Phq9;

pub const ITEM_COUNT: usize = 9;
pub const MAX_TOTAL: i32 = 27;

/// The frequency options shared by every PHQ-9 item.
pub const OPTION_LABELS: [(i32, &str); 4] = [
    (0, "Not at all"),
    (1, "Several days"),
    (2, "More than half the days"),
    (3, "Nearly every day"),
];

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let range = ResponseRange { min: 0, max: 3 };

            let prompts = [
                ("interest", "Little interest or pleasure in doing things"),
                ("mood", "Feeling down, depressed, or hopeless"),
                (
                    "sleep",
                    "Trouble falling or staying asleep, or sleeping too much",
                ),
                ("energy", "Feeling tired or having little energy"),
                ("appetite", "Poor appetite or overeating"),
                (
                    "self_worth",
                    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                ),
                (
                    "concentration",
                    "Trouble concentrating on things, such as reading the newspaper or watching television",
                ),
                (
                    "psychomotor",
                    "Moving or speaking so slowly that other people could have noticed, or the opposite: being so fidgety or restless that you have been moving around a lot more than usual",
                ),
                (
                    "self_harm",
                    "Thoughts that you would be better off dead or of hurting yourself in some way",
                ),
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
