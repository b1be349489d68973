// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AttendanceStatus, Equipment, EquipmentCategory, EquipmentStatus, Member, MemberStatus,
    Operation, OperationStatus, OperationType, Service, ServiceType, Severity, Vehicle,
    VehicleStatus,
};
use std::str::FromStr;

#[test]
fn test_member_record_deserializes_from_store_payload() {
    let json: &str = r#"{
        "id": "68a1c2d3e4f5",
        "first_name": "Anna",
        "last_name": "Arnold",
        "rank": "Oberfeuerwehrfrau",
        "status": "aktiv",
        "qualifications": ["Atemschutzgeräteträger", "Maschinist"],
        "email": "anna.arnold@example.org",
        "entry_date": "2015-04-01",
        "birth_date": "1992-11-23",
        "last_g26": "2024-03-12",
        "g26_validity_years": 3,
        "last_test_track": "2024-10-05"
    }"#;

    let member: Member = serde_json::from_str(json).unwrap();

    assert_eq!(member.id.as_deref(), Some("68a1c2d3e4f5"));
    assert_eq!(member.full_name(), "Anna Arnold");
    assert_eq!(member.status, MemberStatus::Active);
    assert!(member.has_breathing_apparatus_qualification());
    assert_eq!(member.g26_validity_years, Some(3));
    assert!(member.phone.is_none());
}

#[test]
fn test_member_status_wire_round_trip() {
    for status in [
        MemberStatus::Active,
        MemberStatus::Inactive,
        MemberStatus::Retired,
    ] {
        let json: String = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{status}\""));
        let parsed: MemberStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);
        assert_eq!(MemberStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_service_record_deserializes_with_participants() {
    let json: &str = r#"{
        "id": "svc-1",
        "title": "Atemschutzübung",
        "service_type": "Einsatzübung",
        "date": "2024-05-04T19:00:00",
        "duration_minutes": 120,
        "location": "Gerätehaus",
        "participants": [
            {"member_id": "m1", "member_name": "Anna Arnold", "status": "teilgenommen"},
            {"member_id": "m2", "member_name": "Bernd Becker", "status": "entschuldigt"}
        ]
    }"#;

    let service: Service = serde_json::from_str(json).unwrap();

    assert_eq!(service.service_type, ServiceType::DeploymentDrill);
    assert_eq!(service.participants.len(), 2);
    assert_eq!(service.participants[0].status, AttendanceStatus::Attended);
    assert_eq!(service.participants[1].status, AttendanceStatus::Excused);
}

#[test]
fn test_service_type_covers_all_wire_values() {
    let pairs: [(&str, ServiceType); 8] = [
        ("Übungsdienst", ServiceType::Drill),
        ("Ausbildung", ServiceType::Training),
        ("Einsatzübung", ServiceType::DeploymentDrill),
        ("Gerätewartung", ServiceType::EquipmentMaintenance),
        ("Besprechung", ServiceType::Briefing),
        ("Jugendfeuerwehr", ServiceType::YouthBrigade),
        ("Öffentlichkeitsarbeit", ServiceType::PublicRelations),
        ("Sonstiges", ServiceType::Other),
    ];

    for (wire, expected) in pairs {
        assert_eq!(ServiceType::from_str(wire).unwrap(), expected);
        assert_eq!(expected.as_str(), wire);
    }
}

#[test]
fn test_operation_record_applies_defaults() {
    let json: &str = r#"{
        "id": "op-1",
        "operation_type": "Brandeinsatz",
        "date": "2024-07-12T03:15:00"
    }"#;

    let operation: Operation = serde_json::from_str(json).unwrap();

    assert_eq!(operation.severity, Severity::Medium);
    assert_eq!(operation.status, OperationStatus::Ongoing);
    assert_eq!(operation.duration_minutes, 0);
    assert!(operation.participants.is_empty());
    assert!(operation.vehicles.is_empty());
}

#[test]
fn test_operation_type_covers_all_wire_values() {
    let pairs: [(&str, OperationType); 8] = [
        ("Brandeinsatz", OperationType::Fire),
        ("Technische Hilfeleistung", OperationType::TechnicalAssistance),
        ("Verkehrsunfall", OperationType::TrafficAccident),
        ("Rettungsdienst", OperationType::RescueService),
        ("Gefahrgut", OperationType::HazardousMaterials),
        ("Unwetter", OperationType::SevereWeather),
        ("Fehlalarm", OperationType::FalseAlarm),
        ("Sonstiges", OperationType::Other),
    ];

    for (wire, expected) in pairs {
        assert_eq!(OperationType::from_str(wire).unwrap(), expected);
        assert_eq!(expected.as_str(), wire);
    }
}

#[test]
fn test_vehicle_record_deserializes_from_store_payload() {
    let json: &str = r#"{
        "id": "v-1",
        "name": "Florian Musterstadt 44/1",
        "vehicle_type": "LF 10",
        "license_plate": "MU-FW 441",
        "status": "einsatzbereit",
        "year": 2018,
        "mileage": 24310
    }"#;

    let vehicle: Vehicle = serde_json::from_str(json).unwrap();

    assert_eq!(vehicle.status, VehicleStatus::Operational);
    assert_eq!(vehicle.vehicle_type, "LF 10");
    assert_eq!(vehicle.year, Some(2018));
    assert!(vehicle.next_inspection.is_none());
}

#[test]
fn test_equipment_record_deserializes_from_store_payload() {
    let json: &str = r#"{
        "id": "e-1",
        "name": "B-Schlauch 20m",
        "category": "Schläuche",
        "inventory_number": "SCH-0042",
        "quantity": 12,
        "status": "verfügbar",
        "location": "Fahrzeughalle Regal 3"
    }"#;

    let equipment: Equipment = serde_json::from_str(json).unwrap();

    assert_eq!(equipment.category, EquipmentCategory::Hoses);
    assert_eq!(equipment.quantity, 12);
    assert_eq!(equipment.status, EquipmentStatus::Available);
}

#[test]
fn test_created_records_omit_absent_id_on_serialization() {
    let member: Member = Member {
        id: None,
        first_name: "Clara".to_string(),
        last_name: "Conrad".to_string(),
        rank: "Feuerwehrfrau".to_string(),
        status: MemberStatus::Active,
        qualifications: Vec::new(),
        email: None,
        phone: None,
        address: None,
        entry_date: None,
        birth_date: None,
        last_g26: None,
        last_test_track: None,
        g26_validity_years: None,
    };

    let json: String = serde_json::to_string(&member).unwrap();
    assert!(!json.contains("\"id\""));
    assert!(json.contains("\"status\":\"aktiv\""));
}
