// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Emergency operation (incident) records.
//!
//! Unlike services, operations have no attendance gate: being on the
//! participant list at all counts toward hours, whatever the assigned
//! role says.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Category of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    /// Fire response.
    #[serde(rename = "Brandeinsatz")]
    Fire,
    /// Technical assistance.
    #[serde(rename = "Technische Hilfeleistung")]
    TechnicalAssistance,
    /// Traffic accident.
    #[serde(rename = "Verkehrsunfall")]
    TrafficAccident,
    /// Medical/rescue service support.
    #[serde(rename = "Rettungsdienst")]
    RescueService,
    /// Hazardous materials.
    #[serde(rename = "Gefahrgut")]
    HazardousMaterials,
    /// Severe weather.
    #[serde(rename = "Unwetter")]
    SevereWeather,
    /// False alarm.
    #[serde(rename = "Fehlalarm")]
    FalseAlarm,
    /// Anything else.
    #[serde(rename = "Sonstiges")]
    Other,
}

impl OperationType {
    /// Returns the wire representation of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fire => "Brandeinsatz",
            Self::TechnicalAssistance => "Technische Hilfeleistung",
            Self::TrafficAccident => "Verkehrsunfall",
            Self::RescueService => "Rettungsdienst",
            Self::HazardousMaterials => "Gefahrgut",
            Self::SevereWeather => "Unwetter",
            Self::FalseAlarm => "Fehlalarm",
            Self::Other => "Sonstiges",
        }
    }
}

impl FromStr for OperationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Brandeinsatz" => Ok(Self::Fire),
            "Technische Hilfeleistung" => Ok(Self::TechnicalAssistance),
            "Verkehrsunfall" => Ok(Self::TrafficAccident),
            "Rettungsdienst" => Ok(Self::RescueService),
            "Gefahrgut" => Ok(Self::HazardousMaterials),
            "Unwetter" => Ok(Self::SevereWeather),
            "Fehlalarm" => Ok(Self::FalseAlarm),
            "Sonstiges" => Ok(Self::Other),
            _ => Err(DomainError::InvalidOperationType(s.to_string())),
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity classification of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
    /// Minor incident.
    #[serde(rename = "niedrig")]
    Low,
    /// Standard incident.
    #[default]
    #[serde(rename = "mittel")]
    Medium,
    /// Major incident.
    #[serde(rename = "hoch")]
    High,
    /// Critical incident.
    #[serde(rename = "kritisch")]
    Critical,
}

impl Severity {
    /// Returns the wire representation of this severity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "niedrig",
            Self::Medium => "mittel",
            Self::High => "hoch",
            Self::Critical => "kritisch",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workflow status of an operation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OperationStatus {
    /// Response still in progress.
    #[default]
    #[serde(rename = "laufend")]
    Ongoing,
    /// Response finished and written up.
    #[serde(rename = "abgeschlossen")]
    Completed,
    /// Finished on scene, paperwork pending.
    #[serde(rename = "in Nachbearbeitung")]
    InReview,
}

impl OperationStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "laufend",
            Self::Completed => "abgeschlossen",
            Self::InReview => "in Nachbearbeitung",
        }
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A member's assignment on an operation record.
///
/// Distinct from [`crate::ServiceParticipant`]: operation participation
/// carries a role and never an attendance status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationParticipant {
    /// Id of the referenced member. May dangle if the member was deleted.
    pub member_id: String,
    /// Display name captured at entry time.
    #[serde(default)]
    pub member_name: String,
    /// Assigned role, free-form (e.g. "Maschinist"). Irrelevant for hours.
    #[serde(default)]
    pub role: String,
}

/// An emergency operation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Store-assigned identifier. `None` until the record is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Dispatch number, if one was assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_number: Option<String>,
    /// Incident category.
    pub operation_type: OperationType,
    /// Alarm timestamp, ISO string.
    pub date: String,
    /// Deployment length in minutes. Absent means zero.
    #[serde(default)]
    pub duration_minutes: u32,
    /// Severity classification.
    #[serde(default)]
    pub severity: Severity,
    /// Workflow status.
    #[serde(default)]
    pub status: OperationStatus,
    /// Incident location.
    #[serde(default)]
    pub location: String,
    /// Officer in charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commander: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Names of deployed vehicles.
    #[serde(default)]
    pub vehicles: Vec<String>,
    /// Assigned personnel.
    #[serde(default)]
    pub participants: Vec<OperationParticipant>,
}

impl Operation {
    /// Returns the number shown for this operation.
    ///
    /// Falls back to `E-` plus the first eight characters of the record id
    /// when no dispatch number was recorded.
    #[must_use]
    pub fn display_number(&self) -> String {
        if let Some(number) = &self.operation_number {
            if !number.is_empty() {
                return number.clone();
            }
        }
        let id: &str = self.id.as_deref().unwrap_or("");
        let prefix: &str = id.get(..8).unwrap_or(id);
        format!("E-{prefix}")
    }
}
