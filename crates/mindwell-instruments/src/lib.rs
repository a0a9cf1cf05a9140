//! mindwell-instruments
//!
//! Self-assessment instrument definitions and the scoring engine behind the
//! screening and pathology pages. Pure data and pure functions — the frontend
//! owns all input gathering and rendering.

pub mod error;
pub mod instruments;
pub mod results;
pub mod risk;
pub mod scoring;
pub mod severity;

use error::InstrumentError;
use scoring::{Item, ItemResponse, ValidationError};

/// Trait implemented by each self-assessment instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// The ordered items this instrument presents. Responses address items
    /// by position in this slice.
    fn items(&self) -> &[Item];

    /// Check responses against each item's declared range.
    ///
    /// Advisory only: the scoring path accepts values as-is, so callers that
    /// want strict input checking opt in here. Responses addressing unknown
    /// item indices are skipped, matching the scoring path.
    fn validate_responses(&self, responses: &[ItemResponse]) -> Vec<ValidationError> {
        let items = self.items();
        let mut errors = Vec::new();
        for response in responses {
            if let Some(item) = items.get(response.item)
                && !item.range.contains(response.value)
            {
                errors.push(ValidationError {
                    item: response.item,
                    value: response.value,
                    expected_range: item.range,
                    message: format!(
                        "{}: {} response {} is outside range [{}, {}]",
                        self.name(),
                        item.id,
                        response.value,
                        item.range.min,
                        item.range.max,
                    ),
                });
            }
        }
        errors
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::symptom_checklist::SymptomChecklist7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
