use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A completed questionnaire screening, ready for the history view.
///
/// `responses` holds the raw per-item answers as submitted; `total` and
/// `severity` are derived by the instrument engine at construction time and
/// never recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub instrument_id: String,
    pub responses: serde_json::Value,
    pub total: i32,
    pub severity: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
