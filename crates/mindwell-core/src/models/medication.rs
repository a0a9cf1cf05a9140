use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A medication reminder configured by the user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationReminder {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub time: jiff::civil::Time,
    pub frequency: Frequency,
    pub enabled: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    Daily,
    Weekly,
    AsNeeded,
}

impl FromStr for Frequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "as_needed" => Ok(Self::AsNeeded),
            other => Err(CoreError::UnknownFrequency(other.to_string())),
        }
    }
}
