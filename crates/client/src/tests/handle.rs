// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use florian_domain::{Member, MemberStatus, Service};
use serde_json::{Value, json};

use crate::error::ClientError;
use crate::handle::EntityClient;
use crate::query::{Matcher, SortSpec};
use crate::tests::helpers::InMemoryBackend;

fn member_payload(id: &str, first_name: &str, last_name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "first_name": first_name,
        "last_name": last_name,
        "status": status,
    })
}

fn service_payload(id: &str, date: &str) -> Value {
    json!({
        "id": id,
        "title": "Monatsübung",
        "service_type": "Übungsdienst",
        "date": date,
        "duration_minutes": 120,
    })
}

fn make_member(first_name: &str, last_name: &str) -> Member {
    Member {
        id: None,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        rank: String::new(),
        status: MemberStatus::Active,
        qualifications: Vec::new(),
        email: None,
        phone: None,
        address: None,
        entry_date: None,
        birth_date: None,
        last_g26: None,
        g26_validity_years: None,
        last_test_track: None,
    }
}

#[tokio::test]
async fn test_list_returns_typed_members() {
    let backend: InMemoryBackend = InMemoryBackend::new();
    backend.seed(
        "Member",
        vec![
            member_payload("m1", "Anna", "Berger", "aktiv"),
            member_payload("m2", "Max", "Huber", "pensioniert"),
        ],
    );
    let client: EntityClient<InMemoryBackend> = EntityClient::new(backend);

    let members: Vec<Member> = client.members().list(None, None).await.unwrap();

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].full_name(), "Anna Berger");
    assert_eq!(members[1].status, MemberStatus::Retired);
}

#[tokio::test]
async fn test_list_applies_sort_and_limit() {
    let backend: InMemoryBackend = InMemoryBackend::new();
    backend.seed(
        "Service",
        vec![
            service_payload("s1", "2024-03-01"),
            service_payload("s2", "2024-06-15"),
            service_payload("s3", "2024-01-10"),
        ],
    );
    let client: EntityClient<InMemoryBackend> = EntityClient::new(backend);

    let services: Vec<Service> = client
        .services()
        .list(Some(&SortSpec::parse("-date")), Some(2))
        .await
        .unwrap();

    assert_eq!(services.len(), 2);
    assert_eq!(services[0].date, "2024-06-15");
    assert_eq!(services[1].date, "2024-03-01");
}

#[tokio::test]
async fn test_filter_matches_exact_fields() {
    let backend: InMemoryBackend = InMemoryBackend::new();
    backend.seed(
        "Member",
        vec![
            member_payload("m1", "Anna", "Berger", "aktiv"),
            member_payload("m2", "Max", "Huber", "pensioniert"),
            member_payload("m3", "Lisa", "Moser", "aktiv"),
        ],
    );
    let client: EntityClient<InMemoryBackend> = EntityClient::new(backend);

    let matcher: Matcher = Matcher::new().field("status", "aktiv");
    let members: Vec<Member> = client.members().filter(&matcher).await.unwrap();

    assert_eq!(members.len(), 2);
    assert!(
        members
            .iter()
            .all(|member| member.status == MemberStatus::Active)
    );
}

#[tokio::test]
async fn test_create_assigns_store_id() {
    let client: EntityClient<InMemoryBackend> = EntityClient::new(InMemoryBackend::new());

    let created: Member = client
        .members()
        .create(&make_member("Anna", "Berger"))
        .await
        .unwrap();

    let id: String = created.id.unwrap();
    assert!(id.starts_with("rec-"));
    let members: Vec<Member> = client.members().list(None, None).await.unwrap();
    assert_eq!(members.len(), 1);
}

#[tokio::test]
async fn test_update_merges_fields() {
    let backend: InMemoryBackend = InMemoryBackend::new();
    backend.seed(
        "Member",
        vec![member_payload("m1", "Anna", "Berger", "aktiv")],
    );
    let client: EntityClient<InMemoryBackend> = EntityClient::new(backend);

    let mut changed: Member = make_member("Anna", "Berger");
    changed.status = MemberStatus::Inactive;
    let updated: Member = client.members().update("m1", &changed).await.unwrap();

    assert_eq!(updated.status, MemberStatus::Inactive);
    assert_eq!(updated.id.as_deref(), Some("m1"));
    let members: Vec<Member> = client.members().list(None, None).await.unwrap();
    assert_eq!(members[0].status, MemberStatus::Inactive);
}

#[tokio::test]
async fn test_update_unknown_id_is_rejected() {
    let client: EntityClient<InMemoryBackend> = EntityClient::new(InMemoryBackend::new());

    let result: Result<Member, ClientError> = client
        .members()
        .update("m9", &make_member("Anna", "Berger"))
        .await;

    assert!(matches!(
        result,
        Err(ClientError::Rejected { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_delete_removes_record() {
    let backend: InMemoryBackend = InMemoryBackend::new();
    backend.seed(
        "Member",
        vec![
            member_payload("m1", "Anna", "Berger", "aktiv"),
            member_payload("m2", "Max", "Huber", "aktiv"),
        ],
    );
    let client: EntityClient<InMemoryBackend> = EntityClient::new(backend);

    client.members().delete("m1").await.unwrap();

    let members: Vec<Member> = client.members().list(None, None).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id.as_deref(), Some("m2"));

    let result: Result<(), ClientError> = client.members().delete("m1").await;
    assert!(matches!(
        result,
        Err(ClientError::Rejected { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_me_reports_profile() {
    let client: EntityClient<InMemoryBackend> = EntityClient::new(InMemoryBackend::new());

    let profile = client.me().await.unwrap();

    assert_eq!(profile.email.as_deref(), Some("kommandant@example.org"));
    assert_eq!(profile.role.as_deref(), Some("admin"));
}

#[tokio::test]
async fn test_malformed_record_surfaces_as_serialization_error() {
    let backend: InMemoryBackend = InMemoryBackend::new();
    backend.seed("Member", vec![json!({"id": "m1"})]);
    let client: EntityClient<InMemoryBackend> = EntityClient::new(backend);

    let result: Result<Vec<Member>, ClientError> = client.members().list(None, None).await;

    assert!(matches!(result, Err(ClientError::Serialization(_))));
}
