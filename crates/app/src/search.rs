// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List filtering as the record pages apply it.
//!
//! Every search is a case-insensitive substring match over the fields
//! a page exposes, with an empty query matching every record. Fields
//! that are absent never match. Type and category filters are exact.

use florian_domain::{
    Equipment, EquipmentCategory, Member, Operation, OperationType, Service, ServiceType, Vehicle,
};

fn contains_query(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

fn optional_contains_query(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| contains_query(value, needle))
}

/// Filters the roster on first name, last name, and rank.
#[must_use]
pub fn search_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let needle: String = query.to_lowercase();
    members
        .iter()
        .filter(|member| {
            needle.is_empty()
                || contains_query(&member.first_name, &needle)
                || contains_query(&member.last_name, &needle)
                || contains_query(&member.rank, &needle)
        })
        .collect()
}

/// Filters services on title, location, and description, optionally
/// restricted to one service type.
#[must_use]
pub fn search_services<'a>(
    services: &'a [Service],
    query: &str,
    service_type: Option<ServiceType>,
) -> Vec<&'a Service> {
    let needle: String = query.to_lowercase();
    services
        .iter()
        .filter(|service| service_type.is_none_or(|wanted| service.service_type == wanted))
        .filter(|service| {
            needle.is_empty()
                || contains_query(&service.title, &needle)
                || optional_contains_query(service.location.as_deref(), &needle)
                || optional_contains_query(service.description.as_deref(), &needle)
        })
        .collect()
}

/// Filters operations on location, dispatch number, and description,
/// optionally restricted to one operation type.
#[must_use]
pub fn search_operations<'a>(
    operations: &'a [Operation],
    query: &str,
    operation_type: Option<OperationType>,
) -> Vec<&'a Operation> {
    let needle: String = query.to_lowercase();
    operations
        .iter()
        .filter(|operation| operation_type.is_none_or(|wanted| operation.operation_type == wanted))
        .filter(|operation| {
            needle.is_empty()
                || contains_query(&operation.location, &needle)
                || optional_contains_query(operation.operation_number.as_deref(), &needle)
                || optional_contains_query(operation.description.as_deref(), &needle)
        })
        .collect()
}

/// Filters the fleet on name, vehicle type, and license plate.
#[must_use]
pub fn search_vehicles<'a>(vehicles: &'a [Vehicle], query: &str) -> Vec<&'a Vehicle> {
    let needle: String = query.to_lowercase();
    vehicles
        .iter()
        .filter(|vehicle| {
            needle.is_empty()
                || contains_query(&vehicle.name, &needle)
                || contains_query(&vehicle.vehicle_type, &needle)
                || optional_contains_query(vehicle.license_plate.as_deref(), &needle)
        })
        .collect()
}

/// Filters the inventory on name, inventory number, and location,
/// optionally restricted to one category.
#[must_use]
pub fn search_equipment<'a>(
    equipment: &'a [Equipment],
    query: &str,
    category: Option<EquipmentCategory>,
) -> Vec<&'a Equipment> {
    let needle: String = query.to_lowercase();
    equipment
        .iter()
        .filter(|item| category.is_none_or(|wanted| item.category == wanted))
        .filter(|item| {
            needle.is_empty()
                || contains_query(&item.name, &needle)
                || optional_contains_query(item.inventory_number.as_deref(), &needle)
                || optional_contains_query(item.location.as_deref(), &needle)
        })
        .collect()
}
