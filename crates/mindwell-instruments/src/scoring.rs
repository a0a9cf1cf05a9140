use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Defines the valid range for an item response, inclusive on both ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseRange {
    pub min: i32,
    pub max: i32,
}

impl ResponseRange {
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One question within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub prompt: String,
    pub range: ResponseRange,
}

/// One answered item, keyed by its position in the instrument.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemResponse {
    pub item: usize,
    pub value: i32,
}

/// Sum the responses to the first `item_count` items.
///
/// Mirrors the permissive submission behavior of the screening form: indices
/// outside the instrument are ignored, unanswered items count as 0, and
/// values are summed as given without range checks. When an index appears
/// more than once the first entry wins, preserving map semantics.
pub fn total_score(responses: &[ItemResponse], item_count: usize) -> i32 {
    (0..item_count)
        .filter_map(|item| responses.iter().find(|r| r.item == item))
        .map(|r| r.value)
        .sum()
}

/// A response flagged by advisory validation; see
/// [`Instrument::validate_responses`](crate::Instrument::validate_responses).
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item: usize,
    pub value: i32,
    pub expected_range: ResponseRange,
    pub message: String,
}
