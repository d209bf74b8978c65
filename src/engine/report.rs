use std::borrow::Cow;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::attendance::AttendanceRecord;
use crate::model::personnel::Personnel;
use crate::utils::date_format::{format_date, format_time};

pub const DELIMITER: u8 = b',';
pub const OPEN_SESSION_LABEL: &str = "in progress";
pub const NO_DURATION_LABEL: &str = "-";
const MISSING_PHONE_LABEL: &str = "-";

/// `125` → `"2h 5m"`.
pub fn format_duration(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// A row in a delimited-text export.
pub trait DelimitedRow {
    const HEADER: &'static [&'static str];

    fn fields(&self) -> Vec<Cow<'_, str>>;
}

impl DelimitedRow for AttendanceRecord {
    const HEADER: &'static [&'static str] =
        &["Personnel", "Date", "Check In", "Check Out", "Duration"];

    fn fields(&self) -> Vec<Cow<'_, str>> {
        let check_out = match self.check_out {
            Some(t) => Cow::Owned(format_time(t)),
            None => Cow::Borrowed(OPEN_SESSION_LABEL),
        };
        let duration = if self.duration > 0 {
            Cow::Owned(format_duration(u64::from(self.duration)))
        } else {
            Cow::Borrowed(NO_DURATION_LABEL)
        };

        vec![
            Cow::Borrowed(self.personnel_name.as_str()),
            Cow::Owned(format_date(self.date)),
            Cow::Owned(format_time(self.check_in)),
            check_out,
            duration,
        ]
    }
}

impl DelimitedRow for Personnel {
    const HEADER: &'static [&'static str] = &[
        "Name",
        "Email",
        "Position",
        "Department",
        "Phone",
        "Start Date",
        "Status",
    ];

    fn fields(&self) -> Vec<Cow<'_, str>> {
        let phone = self
            .phone_number
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(MISSING_PHONE_LABEL);

        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.position.as_str()),
            Cow::Borrowed(self.department.as_str()),
            Cow::Borrowed(phone),
            Cow::Owned(format_date(self.start_date)),
            Cow::Owned(self.status.to_string()),
        ]
    }
}

/// Header line plus one line per row. Fields holding the delimiter, quotes
/// or line breaks are quoted.
pub fn to_delimited_text<T: DelimitedRow>(rows: &[T]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(T::HEADER)?;
    for row in rows {
        writer.write_record(row.fields().iter().map(|f| f.as_bytes()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Storage(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::validation(format!("export is not UTF-8: {e}")))
}

pub fn attendance_report_filename(today: NaiveDate) -> String {
    format!("attendance_report_{}.csv", format_date(today))
}

pub fn personnel_list_filename(today: NaiveDate) -> String {
    format!("personnel_list_{}.csv", format_date(today))
}
