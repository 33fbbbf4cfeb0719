//! Date storage.

use chrono::{DateTime, Utc};

/// A point in time, stored as milliseconds since the Unix epoch.
///
/// Dates are mutable containers: a [`DateRef`](crate::DateRef) shared by two
/// values observes [`set_millis`](Self::set_millis) through both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateData {
    millis: i64,
}

impl DateData {
    /// Creates a date from epoch milliseconds.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Returns the epoch milliseconds.
    #[must_use]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    /// Moves the date to another instant.
    pub fn set_millis(&mut self, millis: i64) {
        self.millis = millis;
    }

    /// Converts to a `chrono` timestamp.
    ///
    /// Returns `None` if the instant is outside chrono's representable range.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis)
    }
}

impl From<DateTime<Utc>> for DateData {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_millis(dt.timestamp_millis())
    }
}
