// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Member name is empty or invalid.
    InvalidName(String),
    /// Medical exam validity span must be a positive number of years.
    InvalidValidityYears {
        /// The invalid value.
        years: u8,
    },
    /// Report year is outside the supported calendar range.
    InvalidReportYear(String),
    /// Member status string does not match a known status.
    InvalidMemberStatus(String),
    /// Sort key string does not match a known sort key.
    InvalidSortKey(String),
    /// Service type string does not match a known type.
    InvalidServiceType(String),
    /// Operation type string does not match a known type.
    InvalidOperationType(String),
    /// Equipment category string does not match a known category.
    InvalidEquipmentCategory(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidValidityYears { years } => {
                write!(
                    f,
                    "Invalid validity years: {years}. Must be greater than 0"
                )
            }
            Self::InvalidReportYear(msg) => write!(f, "Invalid report year: {msg}"),
            Self::InvalidMemberStatus(value) => {
                write!(f, "Invalid member status: '{value}'")
            }
            Self::InvalidSortKey(value) => write!(f, "Invalid sort key: '{value}'"),
            Self::InvalidServiceType(value) => {
                write!(f, "Invalid service type: '{value}'")
            }
            Self::InvalidOperationType(value) => {
                write!(f, "Invalid operation type: '{value}'")
            }
            Self::InvalidEquipmentCategory(value) => {
                write!(f, "Invalid equipment category: '{value}'")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
