// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard view over the jointly fetched collections.

use florian_domain::{
    Equipment, Member, Operation, OperationStatus, OperationType, Severity, Vehicle, VehicleStatus,
};

/// Operations the dashboard fetch asks the store for, newest first.
pub const RECENT_OPERATIONS_FETCH_LIMIT: u32 = 10;

/// Operations the dashboard actually shows.
pub const RECENT_OPERATIONS_DISPLAY_CAP: usize = 5;

/// Vehicles shown in the status side list.
pub const VEHICLE_GLANCE_CAP: usize = 5;

/// One operation line in the recent-operations list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSummary {
    /// Display label, dispatch number or a derived fallback.
    pub label: String,
    pub operation_type: OperationType,
    /// Alarm timestamp as stored.
    pub date: String,
    pub location: String,
    pub severity: Severity,
    pub status: OperationStatus,
}

/// One vehicle line in the status side list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleGlance {
    pub name: String,
    pub vehicle_type: String,
    pub status: VehicleStatus,
}

/// Assembled dashboard state.
///
/// The operation count reflects the fetched operations, which the
/// dashboard deliberately caps at [`RECENT_OPERATIONS_FETCH_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub member_count: usize,
    pub operation_count: usize,
    pub vehicle_count: usize,
    pub equipment_count: usize,
    pub recent_operations: Vec<OperationSummary>,
    pub vehicle_glance: Vec<VehicleGlance>,
    /// Vehicles currently in maintenance, driving the alert banner.
    pub vehicles_in_maintenance: usize,
}

/// Display label for an operation.
///
/// Uses the dispatch number when one was assigned, otherwise `E-` plus
/// the first eight characters of the record id.
#[must_use]
pub fn operation_label(operation: &Operation) -> String {
    operation.display_number()
}

/// Builds the dashboard from the four fetched collections.
///
/// # Arguments
///
/// * `members` - The full roster
/// * `operations` - Recent operations, already sorted newest first
/// * `vehicles` - The full fleet
/// * `equipment` - The full inventory
#[must_use]
pub fn assemble_dashboard(
    members: &[Member],
    operations: &[Operation],
    vehicles: &[Vehicle],
    equipment: &[Equipment],
) -> DashboardView {
    let recent_operations: Vec<OperationSummary> = operations
        .iter()
        .take(RECENT_OPERATIONS_DISPLAY_CAP)
        .map(|operation| OperationSummary {
            label: operation_label(operation),
            operation_type: operation.operation_type,
            date: operation.date.clone(),
            location: operation.location.clone(),
            severity: operation.severity,
            status: operation.status,
        })
        .collect();

    let vehicle_glance: Vec<VehicleGlance> = vehicles
        .iter()
        .take(VEHICLE_GLANCE_CAP)
        .map(|vehicle| VehicleGlance {
            name: vehicle.name.clone(),
            vehicle_type: vehicle.vehicle_type.clone(),
            status: vehicle.status,
        })
        .collect();

    let vehicles_in_maintenance: usize = vehicles
        .iter()
        .filter(|vehicle| vehicle.status == VehicleStatus::InMaintenance)
        .count();

    DashboardView {
        member_count: members.len(),
        operation_count: operations.len(),
        vehicle_count: vehicles.len(),
        equipment_count: equipment.len(),
        recent_operations,
        vehicle_glance,
        vehicles_in_maintenance,
    }
}
