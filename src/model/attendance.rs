use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::date_format;

/// One daily attendance session. Open while `check_out` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "0d5c2b3e-1f5a-4c8b-8c0e-6b0e7f5d2a10",
        "personnelId": "p1",
        "personnelName": "Ada Lovelace",
        "date": "05.03.2024",
        "checkIn": "09:00",
        "checkOut": "17:30",
        "duration": 510
    })
)]
pub struct AttendanceRecord {
    pub id: String,
    pub personnel_id: String,
    /// Name as it was at check-in time.
    pub personnel_name: String,
    #[serde(with = "date_format::date")]
    #[schema(example = "05.03.2024", value_type = String)]
    pub date: NaiveDate,
    #[serde(with = "date_format::time")]
    #[schema(example = "09:00", value_type = String)]
    pub check_in: NaiveTime,
    #[serde(default, with = "date_format::option_time")]
    #[schema(example = "17:30", value_type = Option<String>)]
    pub check_out: Option<NaiveTime>,
    /// Minutes worked; 0 while the session is open.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttendanceRecord {
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }
}

pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
