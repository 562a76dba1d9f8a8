use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::LaunchError;

/// A four-digit calendar year accepted for a year query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LaunchYear(i32);

impl LaunchYear {
    /// Parse a year token.
    ///
    /// The token must be exactly four ASCII digits.
    ///
    /// # Errors
    /// Returns `InvalidYear` for any other shape.
    pub fn parse(text: &str) -> Result<Self, LaunchError> {
        if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LaunchError::InvalidYear);
        }
        text.parse::<i32>()
            .map(Self)
            .map_err(|_| LaunchError::InvalidYear)
    }

    /// Reject years strictly after the year of `today`.
    ///
    /// # Errors
    /// Returns `InvalidYear` for a future year.
    pub fn not_after(self, today: NaiveDate) -> Result<Self, LaunchError> {
        if self.0 <= today.year() {
            Ok(self)
        } else {
            Err(LaunchError::InvalidYear)
        }
    }

    /// Parse `text` and check it against `today`.
    ///
    /// # Errors
    /// Returns `InvalidYear` if either check fails.
    pub fn validate(text: &str, today: NaiveDate) -> Result<Self, LaunchError> {
        Self::parse(text)?.not_after(today)
    }

    /// The numeric year.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for LaunchYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Parse a strict `YYYY-MM-DD` token into a calendar date.
///
/// Zero-padding is mandatory and the date must exist (no `2019-02-30`).
#[must_use]
pub fn parse_day(text: &str) -> Option<NaiveDate> {
    let b = text.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    let digits = |s: &[u8]| s.iter().all(u8::is_ascii_digit);
    if !(digits(&b[0..4]) && digits(&b[5..7]) && digits(&b[8..10])) {
        return None;
    }
    let year = text[0..4].parse::<i32>().ok()?;
    let month = text[5..7].parse::<u32>().ok()?;
    let day = text[8..10].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// A validated date range for a range query.
///
/// Only ranges that straddle the validation day are constructible: the start
/// is on or before it and the end is on or after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Parse and check both bounds against `today`, start first.
    ///
    /// # Errors
    /// Returns `InvalidRangeStart` when the start is malformed or after `today`,
    /// otherwise `InvalidRangeEnd` when the end is malformed or before `today`.
    pub fn validate(start: &str, end: &str, today: NaiveDate) -> Result<Self, LaunchError> {
        let start = parse_day(start)
            .filter(|d| *d <= today)
            .ok_or(LaunchError::InvalidRangeStart)?;
        let end = parse_day(end)
            .filter(|d| *d >= today)
            .ok_or(LaunchError::InvalidRangeEnd)?;
        Ok(Self { start, end })
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// True if `day` falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Start bound formatted as the upstream `start` query value.
    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End bound formatted as the upstream `end` query value.
    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
