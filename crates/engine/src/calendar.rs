//! Adapter between chrono calendar values and the integer date terms the
//! solar algorithm works with.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// A validated UTC calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    date: NaiveDate,
}

impl CalendarDate {
    /// Returns `None` for dates that do not exist (e.g. February 30th).
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Self { date })
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn naive(&self) -> NaiveDate {
        self.date
    }

    pub fn next_day(&self) -> Option<Self> {
        self.date.succ_opt().map(|date| Self { date })
    }

    /// Day number used by the almanac sunrise algorithm.
    ///
    /// `N1 - N2 * N3 + day - 30` with the leap-year term taken from `year mod 4`;
    /// this equals the ordinal day for every year whose leap status follows the
    /// four-year rule.
    pub fn day_number(&self) -> i32 {
        let year = self.year();
        let month = self.month() as i32;
        let day = self.day() as i32;

        let n1 = 275 * month / 9;
        let n2 = (month + 9) / 12;
        let n3 = 1 + (year.rem_euclid(4) + 2) / 3;
        n1 - n2 * n3 + day - 30
    }

    /// UTC instant at `hour:minute` on this date, `None` if either is out of range.
    pub fn at_utc(&self, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
        self.date
            .and_hms_opt(hour, minute, 0)
            .map(|naive| naive.and_utc())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(value: NaiveDateTime) -> Self {
        Self { date: value.date() }
    }
}

/// Only the UTC calendar date is kept; the time of day is discarded.
impl From<DateTime<Utc>> for CalendarDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            date: value.date_naive(),
        }
    }
}
