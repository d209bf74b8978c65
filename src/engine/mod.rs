pub mod clock;
pub mod query;
pub mod report;
pub mod timesheet;

pub use clock::{Clock, SystemClock};
