// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query parameters for entity listings.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Sort order for a listing, expressed over a single record field.
///
/// The wire form is the field name, prefixed with `-` for descending
/// order, e.g. `-date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    field: String,
    descending: bool,
}

impl SortSpec {
    /// Creates an ascending sort over the given field.
    #[must_use]
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: false,
        }
    }

    /// Creates a descending sort over the given field.
    #[must_use]
    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: true,
        }
    }

    /// Parses the wire form, treating a leading `-` as descending.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        spec.strip_prefix('-')
            .map_or_else(|| Self::ascending(spec), Self::descending)
    }

    /// Returns the field this sort applies to.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns whether the order is descending.
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        self.descending
    }
}

impl std::fmt::Display for SortSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            write!(f, "{}", self.field)
        }
    }
}

/// Exact-match predicate over one or more record fields.
///
/// Serializes to the flat JSON object the store's filter endpoint
/// expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Matcher {
    fields: BTreeMap<String, Value>,
}

impl Matcher {
    /// Creates an empty matcher that matches every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exact-match requirement on a field.
    #[must_use]
    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Returns whether the matcher carries no requirements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Checks a raw record against every requirement.
    #[must_use]
    pub fn matches(&self, record: &Value) -> bool {
        self.fields
            .iter()
            .all(|(name, expected)| record.get(name) == Some(expected))
    }
}
