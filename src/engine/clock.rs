use chrono::{Local, NaiveDateTime};

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the process' local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
