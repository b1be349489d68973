// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod expiry;
mod hours;
mod inventory;
mod member;
mod operation;
mod report_year;
mod roster;
mod service;
mod validation;

#[cfg(test)]
mod tests;

pub use expiry::{
    CredentialExpiry, EXPIRY_WARNING_DAYS, ExpiryState, TEST_TRACK_VALIDITY_YEARS,
    evaluate_expiry, g26_expiry, test_track_expiry,
};
pub use hours::{
    HoursReport, HoursSortKey, HoursTotals, MemberHoursRow, RecordKind, SkippedRecord,
    aggregate_hours, service_hours_for_member,
};
pub use roster::{
    ActivityLevel, CRITICAL_SERVICE_HOURS, PROBLEMATIC_SERVICE_HOURS, RosterBreakdown,
    roster_breakdown,
};

// Re-export public types
pub use error::DomainError;
pub use inventory::{Equipment, EquipmentCategory, EquipmentStatus, Vehicle, VehicleStatus};
pub use member::{Member, MemberStatus};
pub use operation::{Operation, OperationParticipant, OperationStatus, OperationType, Severity};
pub use report_year::{ReportYear, lenient_date, parse_record_date};
pub use service::{AttendanceStatus, Service, ServiceParticipant, ServiceType};
pub use validation::validate_member_fields;
