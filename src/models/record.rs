use super::coordinates::Coordinates;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One attendance record as the backend stores it.
/// Timestamps travel as nanoseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub check_in_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<i64>,
    pub location: Coordinates,
}

impl AttendanceRecord {
    pub fn check_in_local(&self) -> DateTime<Local> {
        DateTime::<Utc>::from_timestamp_nanos(self.check_in_time).with_timezone(&Local)
    }

    pub fn check_out_local(&self) -> Option<DateTime<Local>> {
        self.check_out_time
            .map(|t| DateTime::<Utc>::from_timestamp_nanos(t).with_timezone(&Local))
    }

    /// Local calendar day the record belongs to (day of the check-in).
    pub fn day(&self) -> NaiveDate {
        self.check_in_local().date_naive()
    }

    pub fn is_open(&self) -> bool {
        self.check_out_time.is_none()
    }
}

/// Caller's situation right now, derived from the current month's records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStatus {
    pub is_checked_in: bool,
    pub last_record: Option<AttendanceRecord>,
}
