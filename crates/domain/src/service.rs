// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Training and service session records.
//!
//! A service is an internal session (drill, training, maintenance
//! evening) with per-member attendance tracking. Only participants marked
//! as attended count toward hour totals.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Category of a service session.
///
/// The stored vocabulary is German and closed: every value was entered
/// through the application's own pick lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Regular exercise evening.
    #[serde(rename = "Übungsdienst")]
    Drill,
    /// Formal training.
    #[serde(rename = "Ausbildung")]
    Training,
    /// Deployment exercise.
    #[serde(rename = "Einsatzübung")]
    DeploymentDrill,
    /// Apparatus maintenance session.
    #[serde(rename = "Gerätewartung")]
    EquipmentMaintenance,
    /// Staff meeting.
    #[serde(rename = "Besprechung")]
    Briefing,
    /// Youth brigade session.
    #[serde(rename = "Jugendfeuerwehr")]
    YouthBrigade,
    /// Public relations work.
    #[serde(rename = "Öffentlichkeitsarbeit")]
    PublicRelations,
    /// Anything else.
    #[serde(rename = "Sonstiges")]
    Other,
}

impl ServiceType {
    /// Returns the wire representation of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Drill => "Übungsdienst",
            Self::Training => "Ausbildung",
            Self::DeploymentDrill => "Einsatzübung",
            Self::EquipmentMaintenance => "Gerätewartung",
            Self::Briefing => "Besprechung",
            Self::YouthBrigade => "Jugendfeuerwehr",
            Self::PublicRelations => "Öffentlichkeitsarbeit",
            Self::Other => "Sonstiges",
        }
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Übungsdienst" => Ok(Self::Drill),
            "Ausbildung" => Ok(Self::Training),
            "Einsatzübung" => Ok(Self::DeploymentDrill),
            "Gerätewartung" => Ok(Self::EquipmentMaintenance),
            "Besprechung" => Ok(Self::Briefing),
            "Jugendfeuerwehr" => Ok(Self::YouthBrigade),
            "Öffentlichkeitsarbeit" => Ok(Self::PublicRelations),
            "Sonstiges" => Ok(Self::Other),
            _ => Err(DomainError::InvalidServiceType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attendance outcome of a single service participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// Present for the session. The only status that earns hours.
    #[serde(rename = "teilgenommen")]
    Attended,
    /// Absent with excuse.
    #[serde(rename = "entschuldigt")]
    Excused,
    /// Absent without excuse.
    #[serde(rename = "unentschuldigt")]
    Unexcused,
}

impl AttendanceStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Attended => "teilgenommen",
            Self::Excused => "entschuldigt",
            Self::Unexcused => "unentschuldigt",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A member's attendance entry on a service record.
///
/// Distinct from [`crate::OperationParticipant`]: service participation
/// carries an attendance status and never a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceParticipant {
    /// Id of the referenced member. May dangle if the member was deleted.
    pub member_id: String,
    /// Display name captured at entry time.
    #[serde(default)]
    pub member_name: String,
    /// Attendance outcome.
    pub status: AttendanceStatus,
}

/// A training/service session record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Store-assigned identifier. `None` until the record is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Session title.
    pub title: String,
    /// Session category.
    pub service_type: ServiceType,
    /// Session timestamp, ISO string.
    pub date: String,
    /// Session length in minutes. Absent means zero.
    #[serde(default)]
    pub duration_minutes: u32,
    /// Where the session took place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Instructor or session lead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Attendance list.
    #[serde(default)]
    pub participants: Vec<ServiceParticipant>,
}
