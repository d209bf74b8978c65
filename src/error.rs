use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the record store and the attendance engines.
///
/// Every variant is recoverable: the store is left untouched whenever an
/// operation fails its precondition.
#[derive(Error, Debug)]
pub enum Error {
    #[error("personnel {personnel_id} is already checked in on {date}")]
    AlreadyCheckedIn {
        personnel_id: String,
        date: NaiveDate,
    },

    #[error("no open attendance session for personnel {personnel_id} on {date}")]
    NoOpenSession {
        personnel_id: String,
        date: NaiveDate,
    },

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("export error: {0}")]
    Export(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::ValidationFailed(msg.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::AlreadyCheckedIn {
            personnel_id: "p1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "personnel p1 is already checked in on 2024-03-05"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("personnel", "42");
        assert_eq!(err.to_string(), "personnel 42 not found");
    }
}
