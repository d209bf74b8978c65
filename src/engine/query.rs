use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::attendance::AttendanceRecord;
use crate::model::personnel::Personnel;
use crate::utils::date_format;

/// Attendance filter; every criterion is optional and they combine with AND.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AttendanceFilter {
    /// Inclusive lower bound (`DD.MM.YYYY` or `YYYY-MM-DD`)
    #[serde(default, with = "date_format::option_date")]
    #[param(example = "01.03.2024", value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound
    #[serde(default, with = "date_format::option_date")]
    #[param(example = "31.03.2024", value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
    /// Department name
    pub department: Option<String>,
    /// Exact personnel name
    pub personnel_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_minutes: u64,
    pub total_days: usize,
    pub total_personnel: usize,
    pub avg_minutes_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelSummary {
    pub name: String,
    pub total_minutes: u64,
    pub total_days: usize,
}

/// Records matching `criteria`, in store order.
///
/// Department membership is resolved by name: a record belongs to a
/// department when some person of that department has the record's
/// `personnel_name`.
pub fn filter(
    records: &[AttendanceRecord],
    personnel: &[Personnel],
    criteria: &AttendanceFilter,
) -> Vec<AttendanceRecord> {
    let department_names: Option<HashSet<&str>> = criteria.department.as_deref().map(|dept| {
        personnel
            .iter()
            .filter(|p| p.department == dept)
            .map(|p| p.name.as_str())
            .collect()
    });

    records
        .iter()
        .filter(|r| criteria.start_date.is_none_or(|start| r.date >= start))
        .filter(|r| criteria.end_date.is_none_or(|end| r.date <= end))
        .filter(|r| {
            department_names
                .as_ref()
                .is_none_or(|names| names.contains(r.personnel_name.as_str()))
        })
        .filter(|r| {
            criteria
                .personnel_name
                .as_deref()
                .is_none_or(|name| r.personnel_name == name)
        })
        .cloned()
        .collect()
}

pub fn total_minutes(records: &[AttendanceRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.duration)).sum()
}

pub fn aggregate(records: &[AttendanceRecord]) -> Stats {
    let total_minutes = total_minutes(records);
    let total_days = records.iter().map(|r| r.date).collect::<HashSet<_>>().len();
    let total_personnel = records
        .iter()
        .map(|r| r.personnel_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    let avg_minutes_per_day = if total_days > 0 {
        total_minutes as f64 / total_days as f64
    } else {
        0.0
    };

    Stats {
        total_minutes,
        total_days,
        total_personnel,
        avg_minutes_per_day,
    }
}

/// Per-person totals, busiest first; ties keep first-seen order.
pub fn summarize_by_personnel(records: &[AttendanceRecord]) -> Vec<PersonnelSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<PersonnelSummary> = Vec::new();

    for record in records {
        let slot = *index
            .entry(record.personnel_name.as_str())
            .or_insert_with(|| {
                summaries.push(PersonnelSummary {
                    name: record.personnel_name.clone(),
                    total_minutes: 0,
                    total_days: 0,
                });
                summaries.len() - 1
            });
        summaries[slot].total_minutes += u64::from(record.duration);
        summaries[slot].total_days += 1;
    }

    summaries.sort_by(|a, b| b.total_minutes.cmp(&a.total_minutes));
    summaries
}

pub fn today(records: &[AttendanceRecord], now: NaiveDateTime) -> Vec<AttendanceRecord> {
    let date = now.date();
    records.iter().filter(|r| r.date == date).cloned().collect()
}

pub fn current_month(records: &[AttendanceRecord], now: NaiveDateTime) -> Vec<AttendanceRecord> {
    let (year, month) = (now.year(), now.month());
    records
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .cloned()
        .collect()
}
