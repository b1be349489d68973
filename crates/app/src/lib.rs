// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! View assembly for the Florian console.
//!
//! Pure functions from already-fetched collections to renderable view
//! models. Fetching stays in the client crate, rendering in the
//! console binary; nothing here performs I/O.

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

mod dashboard;
mod export;
mod member_detail;
mod report;
mod search;
mod sequence;

pub use dashboard::{
    DashboardView, OperationSummary, RECENT_OPERATIONS_DISPLAY_CAP, RECENT_OPERATIONS_FETCH_LIMIT,
    VEHICLE_GLANCE_CAP, VehicleGlance, assemble_dashboard, operation_label,
};
pub use export::{ExportError, hours_report_csv};
pub use member_detail::{MemberDetail, activity_badge, expiry_badge, member_detail};
pub use report::{
    HoursReportView, YEAR_CHOICE_COUNT, assemble_hours_report, sort_key_label, year_choices,
};
pub use search::{
    search_equipment, search_members, search_operations, search_services, search_vehicles,
};
pub use sequence::{FetchTicket, RequestSequence};
