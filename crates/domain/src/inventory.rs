// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vehicle fleet and equipment inventory records.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Readiness status of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    /// Ready for deployment.
    #[serde(rename = "einsatzbereit")]
    Operational,
    /// In the workshop.
    #[serde(rename = "in Wartung")]
    InMaintenance,
    /// Decommissioned or long-term unavailable.
    #[serde(rename = "außer Dienst")]
    OutOfService,
}

impl VehicleStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "einsatzbereit",
            Self::InMaintenance => "in Wartung",
            Self::OutOfService => "außer Dienst",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A vehicle in the department fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Store-assigned identifier. `None` until the record is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Radio call name, e.g. "Florian Musterstadt 44/1".
    pub name: String,
    /// Apparatus type designation, free-form (e.g. "LF 10", "DLK").
    #[serde(default)]
    pub vehicle_type: String,
    /// License plate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    /// Readiness status.
    pub status: VehicleStatus,
    /// Manufacturer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Year of manufacture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Odometer reading in kilometers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u32>,
    /// Date of the last technical inspection, ISO string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_inspection: Option<String>,
    /// Date of the next technical inspection, ISO string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_inspection: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Inventory category of an equipment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    /// Breathing apparatus and masks.
    #[serde(rename = "Atemschutz")]
    BreathingApparatus,
    /// Hoses.
    #[serde(rename = "Schläuche")]
    Hoses,
    /// Nozzles, couplings, fittings.
    #[serde(rename = "Armaturen")]
    Fittings,
    /// Rescue tools.
    #[serde(rename = "Rettungsgeräte")]
    RescueTools,
    /// Pumps.
    #[serde(rename = "Pumpen")]
    Pumps,
    /// Hand tools.
    #[serde(rename = "Werkzeug")]
    Tools,
    /// Protective clothing.
    #[serde(rename = "Schutzkleidung")]
    ProtectiveClothing,
    /// Radios and communication gear.
    #[serde(rename = "Kommunikation")]
    Communication,
    /// Anything else.
    #[serde(rename = "Sonstiges")]
    Other,
}

impl EquipmentCategory {
    /// Returns the wire representation of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BreathingApparatus => "Atemschutz",
            Self::Hoses => "Schläuche",
            Self::Fittings => "Armaturen",
            Self::RescueTools => "Rettungsgeräte",
            Self::Pumps => "Pumpen",
            Self::Tools => "Werkzeug",
            Self::ProtectiveClothing => "Schutzkleidung",
            Self::Communication => "Kommunikation",
            Self::Other => "Sonstiges",
        }
    }
}

impl FromStr for EquipmentCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Atemschutz" => Ok(Self::BreathingApparatus),
            "Schläuche" => Ok(Self::Hoses),
            "Armaturen" => Ok(Self::Fittings),
            "Rettungsgeräte" => Ok(Self::RescueTools),
            "Pumpen" => Ok(Self::Pumps),
            "Werkzeug" => Ok(Self::Tools),
            "Schutzkleidung" => Ok(Self::ProtectiveClothing),
            "Kommunikation" => Ok(Self::Communication),
            "Sonstiges" => Ok(Self::Other),
            _ => Err(DomainError::InvalidEquipmentCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Availability status of an equipment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStatus {
    /// In storage and usable.
    #[serde(rename = "verfügbar")]
    Available,
    /// Currently deployed or checked out.
    #[serde(rename = "in Verwendung")]
    InUse,
    /// Broken, awaiting repair or replacement.
    #[serde(rename = "defekt")]
    Defective,
    /// Undergoing its periodic inspection.
    #[serde(rename = "in Prüfung")]
    UnderInspection,
}

impl EquipmentStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "verfügbar",
            Self::InUse => "in Verwendung",
            Self::Defective => "defekt",
            Self::UnderInspection => "in Prüfung",
        }
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn default_quantity() -> u32 {
    1
}

/// An equipment inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    /// Store-assigned identifier. `None` until the record is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Item name.
    pub name: String,
    /// Inventory category.
    pub category: EquipmentCategory,
    /// Inventory tag number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_number: Option<String>,
    /// Number of identical items pooled under this record.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Availability status.
    pub status: EquipmentStatus,
    /// Storage location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Date of the last periodic check, ISO string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_check: Option<String>,
    /// Date of the next periodic check, ISO string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_check: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
