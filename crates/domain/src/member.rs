// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member roster records.
//!
//! Members are created, edited, and deleted exclusively through the remote
//! entity store; nothing in this crate mutates one. Date fields stay ISO
//! strings as stored and are parsed leniently at the point of use.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Roster status of a member.
///
/// The wire vocabulary is German and is preserved verbatim by serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    /// Active duty roster.
    #[serde(rename = "aktiv")]
    Active,
    /// Temporarily not serving.
    #[serde(rename = "inaktiv")]
    Inactive,
    /// Retired from service.
    #[serde(rename = "pensioniert")]
    Retired,
}

impl MemberStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "aktiv",
            Self::Inactive => "inaktiv",
            Self::Retired => "pensioniert",
        }
    }
}

impl FromStr for MemberStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aktiv" => Ok(Self::Active),
            "inaktiv" => Ok(Self::Inactive),
            "pensioniert" => Ok(Self::Retired),
            _ => Err(DomainError::InvalidMemberStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A member of the fire department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Store-assigned identifier. `None` until the record is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Rank designation, free-form (e.g. "Oberfeuerwehrmann").
    #[serde(default)]
    pub rank: String,
    /// Roster status.
    pub status: MemberStatus,
    /// Free-text qualification names.
    #[serde(default)]
    pub qualifications: Vec<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Date the member joined, ISO string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
    /// Birth date, ISO string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Date of the last G26 medical exam, ISO string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_g26: Option<String>,
    /// Validity span of the G26 exam in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g26_validity_years: Option<u8>,
    /// Date of the last breathing-apparatus test track run, ISO string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_test_track: Option<String>,
}

impl Member {
    /// Returns the display name, given name first.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns whether the member holds a breathing-apparatus qualification.
    ///
    /// Qualifications are free text; the check is a case-insensitive
    /// substring match on "atemschutz". Credential badges are only shown
    /// for members where this holds.
    #[must_use]
    pub fn has_breathing_apparatus_qualification(&self) -> bool {
        self.qualifications
            .iter()
            .any(|qualification| qualification.to_lowercase().contains("atemschutz"))
    }
}
