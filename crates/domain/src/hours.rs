// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance hours aggregation across services and operations.
//!
//! This module provides a pure, deterministic reduction over a member
//! roster and the year's service and operation records, producing
//! per-member hour totals with explicit rounding rules and per-record
//! skip diagnostics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use time::Date;

use crate::error::DomainError;
use crate::member::Member;
use crate::operation::Operation;
use crate::report_year::{ReportYear, parse_record_date};
use crate::service::{AttendanceStatus, Service};

/// Field by which the per-member report rows are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoursSortKey {
    /// Order by combined service and operation hours.
    #[default]
    Total,
    /// Order by service hours only.
    Service,
    /// Order by operation hours only.
    Operation,
}

impl HoursSortKey {
    /// Returns the canonical key string for this sort field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Service => "service",
            Self::Operation => "operation",
        }
    }
}

impl FromStr for HoursSortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total" => Ok(Self::Total),
            "service" => Ok(Self::Service),
            "operation" => Ok(Self::Operation),
            _ => Err(DomainError::InvalidSortKey(s.to_string())),
        }
    }
}

impl std::fmt::Display for HoursSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of record a skip diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    /// A training or administrative session.
    Service,
    /// An emergency response incident.
    Operation,
}

impl RecordKind {
    /// Returns a lowercase label for log lines.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Operation => "operation",
        }
    }
}

/// A record that could not be processed and was left out of the totals.
///
/// Skips never abort the aggregation pass. They are collected so the
/// caller can log them for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Kind of the skipped record.
    pub kind: RecordKind,
    /// Store identifier of the record, empty if the record had none.
    pub record_id: String,
    /// Human-readable reason the record was skipped.
    pub reason: String,
}

/// Aggregated hours for a single member within the report window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberHoursRow {
    /// Store identifier of the member.
    pub member_id: String,
    /// Full display name of the member.
    pub member_name: String,
    /// Rank of the member at aggregation time.
    pub rank: String,
    /// Hours from attended services, rounded to one decimal.
    pub service_hours: f64,
    /// Hours from operation participation, rounded to one decimal.
    pub operation_hours: f64,
    /// Combined hours, rounded once from the unrounded sum.
    pub total_hours: f64,
    /// Number of services the member attended.
    pub service_count: u32,
    /// Number of operations the member took part in.
    pub operation_count: u32,
}

impl MemberHoursRow {
    const fn sort_value(&self, key: HoursSortKey) -> f64 {
        match key {
            HoursSortKey::Total => self.total_hours,
            HoursSortKey::Service => self.service_hours,
            HoursSortKey::Operation => self.operation_hours,
        }
    }
}

/// Window-wide totals across all processed records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoursTotals {
    /// In-window services with at least one participant.
    pub service_count: u32,
    /// Sum of the retained rows' rounded service hours, re-rounded.
    pub service_hours: f64,
    /// In-window operations with at least one participant.
    pub operation_count: u32,
    /// Sum of the retained rows' rounded operation hours, re-rounded.
    pub operation_hours: f64,
    /// Sum of the retained rows' rounded total hours, re-rounded.
    pub total_hours: f64,
}

/// Result of aggregating attendance hours for one report year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursReport {
    /// Per-member rows, ordered by the requested sort key.
    pub rows: Vec<MemberHoursRow>,
    /// Window-wide totals.
    pub totals: HoursTotals,
    /// Records that could not be processed.
    pub skipped: Vec<SkippedRecord>,
}

impl HoursReport {
    /// Looks up the row for a member by store identifier.
    ///
    /// Returns `None` when the member has no row, which happens for
    /// members filtered out as zero-activity.
    #[must_use]
    pub fn row_for(&self, member_id: &str) -> Option<&MemberHoursRow> {
        self.rows.iter().find(|row| row.member_id == member_id)
    }
}

struct Accumulator {
    member_id: String,
    member_name: String,
    rank: String,
    service_hours: f64,
    operation_hours: f64,
    service_count: u32,
    operation_count: u32,
}

/// Aggregates attendance hours per member across one calendar year.
///
/// This is a pure, deterministic reduction that:
/// - Seeds a zeroed accumulator for every roster member with an id
/// - Counts a service participant only when their status is attended
/// - Counts every operation participant regardless of role
/// - Tolerates participant ids that match no roster member
/// - Skips records with unparseable dates and reports them in the result
/// - Rounds each exposed value once, from the unrounded accumulator
///
/// Rows whose rounded total is zero are dropped unless
/// `include_zero_activity` is set. The window-wide counts in the totals
/// cover every processed in-window record either way.
///
/// # Arguments
///
/// * `members` - The roster to aggregate over, typically pre-filtered to active members
/// * `services` - All service records to consider
/// * `operations` - All operation records to consider
/// * `year` - The calendar year window
/// * `sort_key` - Field to order the rows by, descending
/// * `include_zero_activity` - Whether to keep rows with zero total hours
///
/// # Returns
///
/// An [`HoursReport`] with ordered rows, window-wide totals, and skip
/// diagnostics.
#[must_use]
pub fn aggregate_hours(
    members: &[Member],
    services: &[Service],
    operations: &[Operation],
    year: ReportYear,
    sort_key: HoursSortKey,
    include_zero_activity: bool,
) -> HoursReport {
    let mut accumulators: Vec<Accumulator> = Vec::with_capacity(members.len());
    let mut index_by_id: HashMap<&str, usize> = HashMap::with_capacity(members.len());

    for member in members {
        // A member without an id cannot be referenced by a participant.
        let Some(id) = member.id.as_deref() else {
            continue;
        };
        index_by_id.insert(id, accumulators.len());
        accumulators.push(Accumulator {
            member_id: id.to_string(),
            member_name: member.full_name(),
            rank: member.rank.clone(),
            service_hours: 0.0,
            operation_hours: 0.0,
            service_count: 0,
            operation_count: 0,
        });
    }

    let mut totals: HoursTotals = HoursTotals::default();
    let mut skipped: Vec<SkippedRecord> = Vec::new();

    for service in services {
        let date: Date = match parse_record_date(&service.date) {
            Ok(date) => date,
            Err(error) => {
                skipped.push(SkippedRecord {
                    kind: RecordKind::Service,
                    record_id: service.id.clone().unwrap_or_default(),
                    reason: error.to_string(),
                });
                continue;
            }
        };

        if !year.contains(date) || service.participants.is_empty() {
            continue;
        }

        totals.service_count += 1;
        let hours: f64 = f64::from(service.duration_minutes) / 60.0;

        for participant in &service.participants {
            if participant.status != AttendanceStatus::Attended {
                continue;
            }
            if let Some(&index) = index_by_id.get(participant.member_id.as_str()) {
                accumulators[index].service_hours += hours;
                accumulators[index].service_count += 1;
            }
        }
    }

    for operation in operations {
        let date: Date = match parse_record_date(&operation.date) {
            Ok(date) => date,
            Err(error) => {
                skipped.push(SkippedRecord {
                    kind: RecordKind::Operation,
                    record_id: operation.id.clone().unwrap_or_default(),
                    reason: error.to_string(),
                });
                continue;
            }
        };

        if !year.contains(date) || operation.participants.is_empty() {
            continue;
        }

        totals.operation_count += 1;
        let hours: f64 = f64::from(operation.duration_minutes) / 60.0;

        // Presence on an operation roster counts as participation. There
        // is no attendance gate and the role field is irrelevant here.
        for participant in &operation.participants {
            if let Some(&index) = index_by_id.get(participant.member_id.as_str()) {
                accumulators[index].operation_hours += hours;
                accumulators[index].operation_count += 1;
            }
        }
    }

    let mut rows: Vec<MemberHoursRow> = accumulators
        .into_iter()
        .map(|accumulator| {
            let raw_total: f64 = accumulator.service_hours + accumulator.operation_hours;
            MemberHoursRow {
                member_id: accumulator.member_id,
                member_name: accumulator.member_name,
                rank: accumulator.rank,
                service_hours: round_to_tenth(accumulator.service_hours),
                operation_hours: round_to_tenth(accumulator.operation_hours),
                total_hours: round_to_tenth(raw_total),
                service_count: accumulator.service_count,
                operation_count: accumulator.operation_count,
            }
        })
        .collect();

    if !include_zero_activity {
        rows.retain(|row| row.total_hours > 0.0);
    }

    // sort_by is stable, so ties keep their roster order.
    rows.sort_by(|a, b| b.sort_value(sort_key).total_cmp(&a.sort_value(sort_key)));

    let service_hours_sum: f64 = rows.iter().map(|row| row.service_hours).sum();
    let operation_hours_sum: f64 = rows.iter().map(|row| row.operation_hours).sum();
    let total_hours_sum: f64 = rows.iter().map(|row| row.total_hours).sum();
    totals.service_hours = round_to_tenth(service_hours_sum);
    totals.operation_hours = round_to_tenth(operation_hours_sum);
    totals.total_hours = round_to_tenth(total_hours_sum);

    HoursReport {
        rows,
        totals,
        skipped,
    }
}

/// Sums one member's attended service hours for a calendar year.
///
/// Shares the window and skip semantics of [`aggregate_hours`]: records
/// with unparseable dates drop out, attendance other than attended
/// contributes nothing, and rounding happens once after summation.
///
/// # Arguments
///
/// * `services` - All service records to consider
/// * `member_id` - Id of the member to sum for
/// * `year` - The calendar year window
#[must_use]
pub fn service_hours_for_member(services: &[Service], member_id: &str, year: ReportYear) -> f64 {
    let mut hours: f64 = 0.0;

    for service in services {
        let Ok(date) = parse_record_date(&service.date) else {
            continue;
        };
        if !year.contains(date) {
            continue;
        }
        let attended: bool = service.participants.iter().any(|participant| {
            participant.member_id == member_id && participant.status == AttendanceStatus::Attended
        });
        if attended {
            hours += f64::from(service.duration_minutes) / 60.0;
        }
    }

    round_to_tenth(hours)
}

/// Rounds to one decimal place, half away from zero.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
