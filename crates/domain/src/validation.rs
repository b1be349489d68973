// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::member::Member;

/// Validates that a member's basic field constraints are met.
///
/// This function checks field-local rules only. It does NOT check for
/// uniqueness against the rest of the roster (that requires context).
///
/// # Arguments
///
/// * `member` - The member to validate
///
/// # Returns
///
/// * `Ok(())` if the member's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The first or last name is empty
/// - The G26 validity window is present but zero
pub fn validate_member_fields(member: &Member) -> Result<(), DomainError> {
    // Rule: both name parts must not be empty
    if member.first_name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "First name cannot be empty",
        )));
    }
    if member.last_name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Last name cannot be empty",
        )));
    }

    // Rule: a zero-year validity window can never be satisfied
    if member.g26_validity_years == Some(0) {
        return Err(DomainError::InvalidValidityYears { years: 0 });
    }

    Ok(())
}
