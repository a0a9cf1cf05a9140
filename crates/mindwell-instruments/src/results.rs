//! Assembles frontend-facing records from scored submissions.

use jiff::Timestamp;
use uuid::Uuid;

use mindwell_core::models::screening::ScreeningRecord;
use mindwell_core::models::symptom::{SymptomAssessment, SymptomFlags};

use crate::error::InstrumentError;
use crate::instruments::phq9;
use crate::risk::RiskTier;
use crate::scoring::{self, ItemResponse};
use crate::severity::SeverityBand;

/// Score a PHQ-9 submission and build the record the history view stores.
///
/// Partial submissions are accepted; unanswered items count as 0, so the
/// score may understate severity rather than blocking the user.
pub fn screening_record(responses: &[ItemResponse]) -> Result<ScreeningRecord, InstrumentError> {
    let total = scoring::total_score(responses, phq9::ITEM_COUNT);
    let band = SeverityBand::classify(total);
    let now = Timestamp::now();
    Ok(ScreeningRecord {
        id: Uuid::new_v4(),
        instrument_id: "phq9".to_string(),
        responses: serde_json::to_value(responses)?,
        total,
        severity: band.id().to_string(),
        created_at: now,
        updated_at: now,
    })
}

/// Classify a symptom checklist run and build its record.
pub fn symptom_record(flags: SymptomFlags) -> SymptomAssessment {
    let count = flags.count();
    let tier = RiskTier::classify(count);
    let now = Timestamp::now();
    SymptomAssessment {
        id: Uuid::new_v4(),
        flags,
        count,
        risk: tier.id().to_string(),
        created_at: now,
        updated_at: now,
    }
}
