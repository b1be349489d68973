// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential expiry evaluation for breathing-apparatus duty.
//!
//! Members on breathing-apparatus duty carry two date-stamped
//! certifications: the G26 medical exam with a per-member validity
//! window, and the annual test track run. This module classifies each
//! certification relative to an explicit reference date so callers and
//! tests never depend on ambient wall-clock time.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::member::Member;
use crate::report_year::lenient_date;

/// Validity of the test track certification in years. Fixed, unlike the
/// per-member G26 window.
pub const TEST_TRACK_VALIDITY_YEARS: u8 = 1;

/// Days before expiry at which a certification starts to warn.
pub const EXPIRY_WARNING_DAYS: i64 = 60;

/// Classification of a certification relative to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryState {
    /// More than the warning window remains.
    Valid,
    /// Expiry is today or within the warning window.
    ExpiresSoon,
    /// Expiry lies strictly before the reference date.
    Expired,
}

/// Evaluated expiry of a single certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialExpiry {
    /// Classification relative to the reference date.
    pub state: ExpiryState,
    /// Date the certification lapses.
    pub expires_on: Date,
    /// Whole days from the reference date to expiry, negative once
    /// lapsed.
    pub days_remaining: i64,
}

/// Evaluates the expiry of a date-stamped certification.
///
/// Absence is not an error state. A member who never completed the
/// certification, or whose validity window is unknown, simply has no
/// expiry to report.
///
/// # Arguments
///
/// * `last_date` - Date the certification was last completed, if ever
/// * `validity_years` - Length of the validity window, if known
/// * `reference` - The date to classify against
///
/// # Returns
///
/// The evaluated expiry, or `None` when either input is absent or the
/// expiry date is not representable.
#[must_use]
pub fn evaluate_expiry(
    last_date: Option<Date>,
    validity_years: Option<u8>,
    reference: Date,
) -> Option<CredentialExpiry> {
    let last: Date = last_date?;
    let years: u8 = validity_years?;
    let expires_on: Date = add_years(last, years)?;

    let days_remaining: i64 = (expires_on - reference).whole_days();
    let state: ExpiryState = if expires_on < reference {
        ExpiryState::Expired
    } else if days_remaining <= EXPIRY_WARNING_DAYS {
        ExpiryState::ExpiresSoon
    } else {
        ExpiryState::Valid
    };

    Some(CredentialExpiry {
        state,
        expires_on,
        days_remaining,
    })
}

/// Evaluates a member's G26 medical exam expiry.
///
/// An unparseable exam date is treated as absent rather than an error,
/// so one bad record cannot break the surrounding report.
///
/// # Arguments
///
/// * `member` - The member whose exam to evaluate
/// * `reference` - The date to classify against
///
/// # Returns
///
/// The evaluated expiry, or `None` when the exam date or validity
/// window is absent.
#[must_use]
pub fn g26_expiry(member: &Member, reference: Date) -> Option<CredentialExpiry> {
    evaluate_expiry(
        lenient_date(member.last_g26.as_deref()),
        member.g26_validity_years,
        reference,
    )
}

/// Evaluates a member's test track expiry with the fixed annual window.
///
/// # Arguments
///
/// * `member` - The member whose test track run to evaluate
/// * `reference` - The date to classify against
///
/// # Returns
///
/// The evaluated expiry, or `None` when the member never ran the track.
#[must_use]
pub fn test_track_expiry(member: &Member, reference: Date) -> Option<CredentialExpiry> {
    evaluate_expiry(
        lenient_date(member.last_test_track.as_deref()),
        Some(TEST_TRACK_VALIDITY_YEARS),
        reference,
    )
}

/// Adds whole calendar years to a date. February 29 anchors to
/// February 28 in non-leap target years.
fn add_years(date: Date, years: u8) -> Option<Date> {
    let target_year: i32 = date.year().checked_add(i32::from(years))?;
    Date::from_calendar_date(target_year, date.month(), date.day())
        .or_else(|_| Date::from_calendar_date(target_year, date.month(), 28))
        .ok()
}
