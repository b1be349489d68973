// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hours report view with year and sort selection.

use florian_domain::{
    HoursReport, HoursSortKey, Member, Operation, ReportYear, Service, aggregate_hours,
};

/// Years offered by the report selector, the current year included.
pub const YEAR_CHOICE_COUNT: u16 = 5;

/// The hours report together with the selection that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursReportView {
    pub year: ReportYear,
    pub sort_key: HoursSortKey,
    pub report: HoursReport,
}

/// Years selectable for the report, newest first.
#[must_use]
pub fn year_choices(current_year: u16) -> Vec<u16> {
    (0..YEAR_CHOICE_COUNT)
        .map(|offset| current_year.saturating_sub(offset))
        .collect()
}

/// German selector label for a sort key.
#[must_use]
pub const fn sort_key_label(sort_key: HoursSortKey) -> &'static str {
    match sort_key {
        HoursSortKey::Total => "Gesamt",
        HoursSortKey::Service => "Dienststunden",
        HoursSortKey::Operation => "Einsatzstunden",
    }
}

/// Runs the aggregation for one year and sort selection.
#[must_use]
pub fn assemble_hours_report(
    members: &[Member],
    services: &[Service],
    operations: &[Operation],
    year: ReportYear,
    sort_key: HoursSortKey,
    include_zero_activity: bool,
) -> HoursReportView {
    let report: HoursReport = aggregate_hours(
        members,
        services,
        operations,
        year,
        sort_key,
        include_zero_activity,
    );
    HoursReportView {
        year,
        sort_key,
        report,
    }
}
