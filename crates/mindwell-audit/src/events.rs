use serde::Serialize;
use tracing::info;

use mindwell_core::models::screening::ScreeningRecord;
use mindwell_core::models::symptom::SymptomAssessment;

/// A structured audit event for user-visible actions.
///
/// There is no server in this platform, so these events exist for local
/// diagnostics and support tooling; they carry no user-identifying fields
/// beyond the record id.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Event for a submitted and scored screening.
    pub fn screening_scored(record: &ScreeningRecord) -> Self {
        Self::new("screening_scored", "screening", record.id.to_string()).with_details(
            serde_json::json!({
                "instrument_id": record.instrument_id,
                "total": record.total,
                "severity": record.severity,
            }),
        )
    }

    /// Event for a completed symptom checklist run.
    pub fn symptoms_assessed(assessment: &SymptomAssessment) -> Self {
        Self::new("symptoms_assessed", "symptom_assessment", assessment.id.to_string())
            .with_details(serde_json::json!({
                "count": assessment.count,
                "risk": assessment.risk,
            }))
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            "audit event"
        );
    }
}
