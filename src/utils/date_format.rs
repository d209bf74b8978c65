use chrono::{NaiveDate, NaiveTime};

/// Calendar dates are stored and exported as day.month.year.
pub const DATE_FORMAT: &str = "%d.%m.%Y";
/// Times of day carry minute precision only.
pub const TIME_FORMAT: &str = "%H:%M";

/// ISO form accepted on input, as sent by HTML date pickers.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parses `DD.MM.YYYY`, falling back to `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, ISO_DATE_FORMAT))
        .ok()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT).ok()
}

/// serde adapter for `NaiveDate` fields.
pub mod date {
    use super::{format_date, parse_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
    }
}

/// serde adapter for optional `NaiveDate` fields.
pub mod option_date {
    use super::{format_date, parse_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_some(&format_date(*d)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {raw}"))),
            None => Ok(None),
        }
    }
}

/// serde adapter for `NaiveTime` fields.
pub mod time {
    use super::{format_time, parse_time};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid time: {raw}")))
    }
}

/// serde adapter for optional `NaiveTime` fields; `null` means still open.
pub mod option_time {
    use super::{format_time, parse_time};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => s.serialize_some(&format_time(*t)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(raw) => parse_time(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid time: {raw}"))),
            None => Ok(None),
        }
    }
}
