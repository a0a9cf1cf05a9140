use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Bookable consultation slots, on the hour.
pub const TIME_SLOTS: [jiff::civil::Time; 6] = [
    jiff::civil::time(9, 0, 0, 0),
    jiff::civil::time(10, 0, 0, 0),
    jiff::civil::time(11, 0, 0, 0),
    jiff::civil::time(14, 0, 0, 0),
    jiff::civil::time(15, 0, 0, 0),
    jiff::civil::time(16, 0, 0, 0),
];

/// A booked consultation with a clinician.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor: String,
    pub department: Department,
    pub date: jiff::civil::Date,
    pub time: jiff::civil::Time,
    pub status: AppointmentStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Department {
    Psychiatry,
    Psychology,
    Neurology,
    GeneralPractice,
}

impl FromStr for Department {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "psychiatry" => Ok(Self::Psychiatry),
            "psychology" => Ok(Self::Psychology),
            "neurology" => Ok(Self::Neurology),
            "general_practice" => Ok(Self::GeneralPractice),
            other => Err(CoreError::UnknownDepartment(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AppointmentStatus {
    Booked,
    Completed,
    Cancelled,
}
