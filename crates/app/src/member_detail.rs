// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-member detail card with credential badges and activity level.

use florian_domain::{
    ActivityLevel, CredentialExpiry, ExpiryState, Member, MemberStatus, ReportYear, Service,
    g26_expiry, service_hours_for_member, test_track_expiry,
};
use time::Date;

/// Detail view of one member.
///
/// Credential badges are only evaluated for members holding a
/// breathing-apparatus qualification; for everyone else both stay
/// `None` even when exam dates are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDetail {
    pub full_name: String,
    pub rank: String,
    pub status: MemberStatus,
    pub qualifications: Vec<String>,
    /// Attended service hours for the selected year.
    pub service_hours: f64,
    pub activity: ActivityLevel,
    /// Whether the breathing-apparatus badges apply to this member.
    pub breathing_apparatus: bool,
    pub g26: Option<CredentialExpiry>,
    pub test_track: Option<CredentialExpiry>,
}

/// Assembles the detail card for one member.
///
/// # Arguments
///
/// * `member` - The roster record
/// * `services` - All service records, for the hours summary
/// * `year` - Calendar year of the hours summary
/// * `reference` - Date the credential badges are evaluated against
#[must_use]
pub fn member_detail(
    member: &Member,
    services: &[Service],
    year: ReportYear,
    reference: Date,
) -> MemberDetail {
    let member_id: &str = member.id.as_deref().unwrap_or_default();
    let service_hours: f64 = service_hours_for_member(services, member_id, year);
    let breathing_apparatus: bool = member.has_breathing_apparatus_qualification();

    let (g26, test_track) = if breathing_apparatus {
        (
            g26_expiry(member, reference),
            test_track_expiry(member, reference),
        )
    } else {
        (None, None)
    };

    MemberDetail {
        full_name: member.full_name(),
        rank: member.rank.clone(),
        status: member.status,
        qualifications: member.qualifications.clone(),
        service_hours,
        activity: ActivityLevel::classify(service_hours),
        breathing_apparatus,
        g26,
        test_track,
    }
}

/// German badge text for a credential expiry.
#[must_use]
pub fn expiry_badge(expiry: &CredentialExpiry) -> String {
    match expiry.state {
        ExpiryState::Valid => "Gültig".to_string(),
        ExpiryState::ExpiresSoon => format!("Läuft ab in {} Tagen", expiry.days_remaining),
        ExpiryState::Expired => "Abgelaufen".to_string(),
    }
}

/// German badge text for an activity level.
#[must_use]
pub const fn activity_badge(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::Ok => "OK",
        ActivityLevel::Problematic => "Problematisch",
        ActivityLevel::Critical => "Kritisch",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use florian_domain::{AttendanceStatus, ServiceParticipant, ServiceType};
    use time::macros::date;

    fn make_member(qualifications: Vec<&str>) -> Member {
        Member {
            id: Some("m1".to_string()),
            first_name: "Anna".to_string(),
            last_name: "Berger".to_string(),
            rank: "Oberfeuerwehrfrau".to_string(),
            status: MemberStatus::Active,
            qualifications: qualifications.into_iter().map(str::to_string).collect(),
            email: None,
            phone: None,
            address: None,
            entry_date: None,
            birth_date: None,
            last_g26: Some("2024-03-01".to_string()),
            g26_validity_years: Some(3),
            last_test_track: Some("2024-03-01".to_string()),
        }
    }

    fn make_service(date: &str, duration_minutes: u32) -> Service {
        Service {
            id: Some("s1".to_string()),
            title: "Übungsabend".to_string(),
            service_type: ServiceType::Drill,
            date: date.to_string(),
            duration_minutes,
            location: None,
            instructor: None,
            description: None,
            notes: None,
            participants: vec![ServiceParticipant {
                member_id: "m1".to_string(),
                member_name: "Anna Berger".to_string(),
                status: AttendanceStatus::Attended,
            }],
        }
    }

    #[test]
    fn test_badges_gated_on_breathing_apparatus_qualification() {
        let year: ReportYear = ReportYear::new(2024).unwrap();
        let reference: Date = date!(2024 - 06 - 01);

        let plain: MemberDetail = member_detail(&make_member(vec![]), &[], year, reference);
        assert!(!plain.breathing_apparatus);
        assert!(plain.g26.is_none());
        assert!(plain.test_track.is_none());

        let holder: MemberDetail = member_detail(
            &make_member(vec!["Atemschutzgeräteträger"]),
            &[],
            year,
            reference,
        );
        assert!(holder.breathing_apparatus);
        assert!(holder.g26.is_some());
        assert!(holder.test_track.is_some());
    }

    #[test]
    fn test_service_hours_and_activity_level() {
        let year: ReportYear = ReportYear::new(2024).unwrap();
        let services: Vec<Service> = vec![
            make_service("2024-02-01T19:30:00", 600),
            make_service("2024-03-01T19:30:00", 660),
        ];

        let detail: MemberDetail =
            member_detail(&make_member(vec![]), &services, year, date!(2024 - 06 - 01));

        assert_eq!(detail.service_hours, 21.0);
        assert_eq!(detail.activity, ActivityLevel::Problematic);
    }

    #[test]
    fn test_expiry_badge_texts() {
        let year: ReportYear = ReportYear::new(2024).unwrap();

        let valid: MemberDetail = member_detail(
            &make_member(vec!["Atemschutz"]),
            &[],
            year,
            date!(2024 - 04 - 01),
        );
        let test_track: CredentialExpiry = valid.test_track.unwrap();
        assert_eq!(test_track.state, ExpiryState::Valid);
        assert_eq!(expiry_badge(&test_track), "Gültig");

        let soon: MemberDetail = member_detail(
            &make_member(vec!["Atemschutz"]),
            &[],
            year,
            date!(2025 - 02 - 01),
        );
        let test_track: CredentialExpiry = soon.test_track.unwrap();
        assert_eq!(test_track.state, ExpiryState::ExpiresSoon);
        assert_eq!(expiry_badge(&test_track), "Läuft ab in 28 Tagen");

        let lapsed: MemberDetail = member_detail(
            &make_member(vec!["Atemschutz"]),
            &[],
            year,
            date!(2025 - 03 - 02),
        );
        let test_track: CredentialExpiry = lapsed.test_track.unwrap();
        assert_eq!(test_track.state, ExpiryState::Expired);
        assert_eq!(expiry_badge(&test_track), "Abgelaufen");
    }

    #[test]
    fn test_activity_badges() {
        assert_eq!(activity_badge(ActivityLevel::Critical), "Kritisch");
        assert_eq!(activity_badge(ActivityLevel::Problematic), "Problematisch");
        assert_eq!(activity_badge(ActivityLevel::Ok), "OK");
    }
}
