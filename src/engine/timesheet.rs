//! Opening and closing daily attendance sessions.
//!
//! Sessions are keyed on (personnel id, local calendar date). Durations come
//! from the minute-of-day of check-in and check-out, so a session that runs
//! past midnight cannot be represented and is clamped to zero minutes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::model::attendance::{AttendanceRecord, minutes_of_day};
use crate::store::{KvStore, RecordStore};
use crate::store::records::new_id;

fn truncate_to_minute(now: NaiveDateTime) -> NaiveTime {
    let time = now.time();
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

fn find_open(records: &[AttendanceRecord], personnel_id: &str, date: NaiveDate) -> Option<usize> {
    records
        .iter()
        .position(|r| r.personnel_id == personnel_id && r.date == date && r.is_open())
}

/// Minutes between two times of day, clamped to zero when `check_out` is
/// earlier than `check_in`.
pub fn session_minutes(check_in: NaiveTime, check_out: NaiveTime) -> u32 {
    minutes_of_day(check_out).saturating_sub(minutes_of_day(check_in))
}

pub fn is_checked_in<S: KvStore>(
    store: &RecordStore<S>,
    personnel_id: &str,
    now: NaiveDateTime,
) -> Result<bool> {
    let records = store.attendance()?;
    Ok(find_open(&records, personnel_id, now.date()).is_some())
}

pub fn check_in<S: KvStore>(
    store: &mut RecordStore<S>,
    personnel_id: &str,
    personnel_name: &str,
    now: NaiveDateTime,
) -> Result<AttendanceRecord> {
    let mut records = store.attendance()?;
    let today = now.date();

    if find_open(&records, personnel_id, today).is_some() {
        warn!(personnel_id, %today, "Check-in rejected: session already open");
        return Err(Error::AlreadyCheckedIn {
            personnel_id: personnel_id.to_string(),
            date: today,
        });
    }

    let record = AttendanceRecord {
        id: new_id(),
        personnel_id: personnel_id.to_string(),
        personnel_name: personnel_name.to_string(),
        date: today,
        check_in: truncate_to_minute(now),
        check_out: None,
        duration: 0,
        notes: None,
    };
    records.push(record.clone());
    store.save_attendance(&records)?;

    info!(personnel_id, record_id = %record.id, check_in = %record.check_in, "Checked in");
    Ok(record)
}

pub fn check_out<S: KvStore>(
    store: &mut RecordStore<S>,
    personnel_id: &str,
    now: NaiveDateTime,
) -> Result<AttendanceRecord> {
    let mut records = store.attendance()?;
    let today = now.date();

    let Some(index) = find_open(&records, personnel_id, today) else {
        warn!(personnel_id, %today, "Check-out rejected: no open session");
        return Err(Error::NoOpenSession {
            personnel_id: personnel_id.to_string(),
            date: today,
        });
    };

    let check_out = truncate_to_minute(now);
    let record = &mut records[index];
    if check_out < record.check_in {
        warn!(
            personnel_id,
            check_in = %record.check_in,
            %check_out,
            "Check-out earlier than check-in, duration clamped to zero"
        );
    }
    record.duration = session_minutes(record.check_in, check_out);
    record.check_out = Some(check_out);
    let closed = record.clone();

    store.save_attendance(&records)?;

    info!(personnel_id, record_id = %closed.id, duration = closed.duration, "Checked out");
    Ok(closed)
}
