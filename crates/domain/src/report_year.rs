// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-year reporting window.
//!
//! Hour totals are always scoped to one calendar year, inclusive from
//! January 1 00:00:00 through December 31 23:59:59 in local calendar
//! semantics. Records carry their timestamps as ISO strings on the wire;
//! parsing is deliberately lenient because the remote store enforces no
//! schema.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Iso8601;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Represents the calendar year a report is scoped to.
///
/// Validated on construction; the window itself is derived, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportYear {
    year: u16,
}

impl ReportYear {
    /// Creates a new `ReportYear`.
    ///
    /// # Arguments
    ///
    /// * `year` - The calendar year to report on
    ///
    /// # Returns
    ///
    /// * `Ok(ReportYear)` if the year is a reasonable calendar year
    /// * `Err(DomainError::InvalidReportYear)` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the year is not between 1900 and 2200.
    pub fn new(year: u16) -> Result<Self, DomainError> {
        if !(1900..=2200).contains(&year) {
            return Err(DomainError::InvalidReportYear(format!(
                "Report year must be between 1900 and 2200, got {year}"
            )));
        }
        Ok(Self { year })
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns whether a date falls inside this year's window.
    ///
    /// The window covers the entire calendar year, so at date resolution
    /// this is year equality: December 31 is the last day in-window and
    /// January 1 of the following year is the first day out.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == i32::from(self.year)
    }
}

impl std::fmt::Display for ReportYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.year)
    }
}

/// Parses a record timestamp into a calendar date.
///
/// The remote store hands back whatever the browser forms stored: full ISO
/// datetimes with or without offsets, datetime-local values without
/// seconds, or bare dates. All of these resolve to their calendar date.
///
/// # Arguments
///
/// * `raw` - The date string as stored on the record
///
/// # Returns
///
/// The calendar date portion of the timestamp.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if no supported form matches.
pub fn parse_record_date(raw: &str) -> Result<Date, DomainError> {
    let trimmed: &str = raw.trim();

    if let Ok(datetime) = PrimitiveDateTime::parse(trimmed, &Iso8601::DEFAULT) {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = OffsetDateTime::parse(trimmed, &Iso8601::DEFAULT) {
        return Ok(datetime.date());
    }
    if let Ok(date) = Date::parse(trimmed, &Iso8601::DEFAULT) {
        return Ok(date);
    }
    // Last resort: a leading YYYY-MM-DD with an unsupported tail.
    if let Some(prefix) = trimmed.get(..10) {
        if let Ok(date) = Date::parse(prefix, &Iso8601::DEFAULT) {
            return Ok(date);
        }
    }

    Err(DomainError::DateParseError {
        date_string: raw.to_string(),
        error: String::from("not an ISO date or datetime"),
    })
}

/// Parses an optional stored date, treating anything unparseable as absent.
///
/// Used for member credential and birth dates, where a malformed value
/// must never break the surrounding evaluation.
#[must_use]
pub fn lenient_date(raw: Option<&str>) -> Option<Date> {
    raw.and_then(|value| parse_record_date(value).ok())
}
