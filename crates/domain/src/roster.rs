// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster composition statistics and activity classification.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::member::{Member, MemberStatus};
use crate::report_year::lenient_date;

/// Yearly service hours below this mark classify as critical.
pub const CRITICAL_SERVICE_HOURS: f64 = 20.0;

/// Yearly service hours below this mark classify as problematic.
pub const PROBLEMATIC_SERVICE_HOURS: f64 = 40.0;

/// Classification of a member's yearly service attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Attendance meets expectations.
    Ok,
    /// Attendance is falling short.
    Problematic,
    /// Attendance is far below expectations.
    Critical,
}

impl ActivityLevel {
    /// Classifies a member's service hours for one calendar year.
    ///
    /// Only service attendance feeds this classification. Operation
    /// turnout is tracked separately and does not factor in.
    ///
    /// # Arguments
    ///
    /// * `service_hours` - The member's service hours for the year
    ///
    /// # Returns
    ///
    /// The activity classification.
    #[must_use]
    pub fn classify(service_hours: f64) -> Self {
        if service_hours < CRITICAL_SERVICE_HOURS {
            Self::Critical
        } else if service_hours < PROBLEMATIC_SERVICE_HOURS {
            Self::Problematic
        } else {
            Self::Ok
        }
    }
}

/// Composition statistics over a member roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterBreakdown {
    /// Total number of members.
    pub total: usize,
    /// Members with active status.
    pub active: usize,
    /// Members with inactive status.
    pub inactive: usize,
    /// Members with retired status.
    pub retired: usize,
    /// Mean age in whole years over members with a known birth date.
    pub average_age: Option<u16>,
    /// Age of the youngest member with a known birth date.
    pub youngest_age: Option<u16>,
    /// Age of the oldest member with a known birth date.
    pub oldest_age: Option<u16>,
}

/// Computes composition statistics over a roster.
///
/// Members without a parseable birth date are counted in the status
/// tallies but left out of the age figures.
///
/// # Arguments
///
/// * `members` - The roster to summarize
/// * `reference` - The date ages are computed against
///
/// # Returns
///
/// The [`RosterBreakdown`] for the roster.
#[must_use]
pub fn roster_breakdown(members: &[Member], reference: Date) -> RosterBreakdown {
    let mut breakdown: RosterBreakdown = RosterBreakdown {
        total: members.len(),
        ..RosterBreakdown::default()
    };

    let mut ages: Vec<u16> = Vec::new();

    for member in members {
        match member.status {
            MemberStatus::Active => breakdown.active += 1,
            MemberStatus::Inactive => breakdown.inactive += 1,
            MemberStatus::Retired => breakdown.retired += 1,
        }

        if let Some(birth_date) = lenient_date(member.birth_date.as_deref()) {
            ages.push(age_in_years(birth_date, reference));
        }
    }

    if !ages.is_empty() {
        let sum: u32 = ages.iter().copied().map(u32::from).sum();
        let count: u32 = u32::try_from(ages.len()).unwrap_or(u32::MAX);
        let rounded_mean: u32 = (sum + count / 2) / count;
        breakdown.average_age = u16::try_from(rounded_mean).ok();
        breakdown.youngest_age = ages.iter().copied().min();
        breakdown.oldest_age = ages.iter().copied().max();
    }

    breakdown
}

/// Calculates age in complete years, counting a year only once the
/// calendar anniversary has been reached.
fn age_in_years(birth_date: Date, as_of: Date) -> u16 {
    if as_of < birth_date {
        return 0;
    }

    let years_diff: i32 = as_of.year() - birth_date.year();

    let anniversary_reached: bool = (as_of.month() > birth_date.month())
        || (as_of.month() == birth_date.month() && as_of.day() >= birth_date.day());

    if anniversary_reached {
        u16::try_from(years_diff).unwrap_or(0)
    } else {
        u16::try_from((years_diff - 1).max(0)).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn make_member(status: MemberStatus, birth_date: Option<&str>) -> Member {
        Member {
            id: Some("m1".to_string()),
            first_name: "Anna".to_string(),
            last_name: "Arnold".to_string(),
            rank: "Feuerwehrfrau".to_string(),
            status,
            qualifications: Vec::new(),
            email: None,
            phone: None,
            address: None,
            entry_date: None,
            birth_date: birth_date.map(str::to_string),
            last_g26: None,
            last_test_track: None,
            g26_validity_years: None,
        }
    }

    #[test]
    fn test_classify_activity_thresholds() {
        assert_eq!(ActivityLevel::classify(0.0), ActivityLevel::Critical);
        assert_eq!(ActivityLevel::classify(19.9), ActivityLevel::Critical);
        assert_eq!(ActivityLevel::classify(20.0), ActivityLevel::Problematic);
        assert_eq!(ActivityLevel::classify(39.9), ActivityLevel::Problematic);
        assert_eq!(ActivityLevel::classify(40.0), ActivityLevel::Ok);
        assert_eq!(ActivityLevel::classify(120.5), ActivityLevel::Ok);
    }

    #[test]
    fn test_breakdown_counts_statuses() {
        let members: Vec<Member> = vec![
            make_member(MemberStatus::Active, None),
            make_member(MemberStatus::Active, None),
            make_member(MemberStatus::Inactive, None),
            make_member(MemberStatus::Retired, None),
        ];

        let breakdown: RosterBreakdown = roster_breakdown(&members, date!(2025 - 06 - 15));

        assert_eq!(breakdown.total, 4);
        assert_eq!(breakdown.active, 2);
        assert_eq!(breakdown.inactive, 1);
        assert_eq!(breakdown.retired, 1);
        assert!(breakdown.average_age.is_none());
    }

    #[test]
    fn test_breakdown_age_figures() {
        let members: Vec<Member> = vec![
            make_member(MemberStatus::Active, Some("1990-06-15")),
            make_member(MemberStatus::Active, Some("2000-06-16")),
            make_member(MemberStatus::Retired, None),
        ];

        let breakdown: RosterBreakdown = roster_breakdown(&members, date!(2025 - 06 - 15));

        // Ages are 35 and 24 (the second anniversary is one day away).
        assert_eq!(breakdown.youngest_age, Some(24));
        assert_eq!(breakdown.oldest_age, Some(35));
        assert_eq!(breakdown.average_age, Some(30));
    }

    #[test]
    fn test_breakdown_unparseable_birth_date_is_skipped() {
        let members: Vec<Member> = vec![make_member(MemberStatus::Active, Some("vor langer Zeit"))];

        let breakdown: RosterBreakdown = roster_breakdown(&members, date!(2025 - 06 - 15));

        assert_eq!(breakdown.total, 1);
        assert!(breakdown.average_age.is_none());
        assert!(breakdown.youngest_age.is_none());
    }

    #[test]
    fn test_breakdown_empty_roster() {
        let breakdown: RosterBreakdown = roster_breakdown(&[], date!(2025 - 06 - 15));
        assert_eq!(breakdown, RosterBreakdown::default());
    }

    #[test]
    fn test_age_on_anniversary() {
        assert_eq!(age_in_years(date!(1990 - 06 - 15), date!(2025 - 06 - 15)), 35);
        assert_eq!(age_in_years(date!(1990 - 06 - 16), date!(2025 - 06 - 15)), 34);
        assert_eq!(age_in_years(date!(2030 - 01 - 01), date!(2025 - 06 - 15)), 0);
    }
}
