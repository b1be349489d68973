// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid name: test");

    let err: DomainError = DomainError::InvalidValidityYears { years: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid validity years: 0. Must be greater than 0"
    );

    let err: DomainError = DomainError::InvalidReportYear(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid report year: test");

    let err: DomainError = DomainError::InvalidMemberStatus(String::from("aktivv"));
    assert_eq!(format!("{err}"), "Invalid member status: 'aktivv'");

    let err: DomainError = DomainError::InvalidSortKey(String::from("rank"));
    assert_eq!(format!("{err}"), "Invalid sort key: 'rank'");

    let err: DomainError = DomainError::InvalidServiceType(String::from("Werkstatt"));
    assert_eq!(format!("{err}"), "Invalid service type: 'Werkstatt'");

    let err: DomainError = DomainError::InvalidOperationType(String::from("Sturm"));
    assert_eq!(format!("{err}"), "Invalid operation type: 'Sturm'");

    let err: DomainError = DomainError::InvalidEquipmentCategory(String::from("Leitern"));
    assert_eq!(format!("{err}"), "Invalid equipment category: 'Leitern'");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("gestern"),
        error: String::from("unexpected format"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date 'gestern': unexpected format"
    );
}

#[test]
fn test_domain_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_err: &E) {}

    let err: DomainError = DomainError::InvalidSortKey(String::from("rank"));
    assert_error(&err);
}
