pub mod phq9;
pub mod symptom_checklist;
