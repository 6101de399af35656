use grantdesk_core::{
    decode_activities, decode_members, EntityType, MemberRole, MemberStatus,
    MemberValidationError, SnapshotError, Viewer,
};
use serde_json::json;
use uuid::Uuid;

#[test]
fn decodes_activity_list_with_unknown_types() {
    let user = Uuid::new_v4();
    let payload = json!([
        {
            "id": Uuid::new_v4(),
            "entity_type": "Budget",
            "description": "raised equipment line",
            "created_at": 1_700_000_000_000_i64,
            "involved_users": [user]
        },
        {
            "id": Uuid::new_v4(),
            "entity_type": "Ethics approval",
            "description": "approved protocol",
            "created_at": 1_700_000_100_000_i64,
            "involved_users": null
        }
    ]);

    let activities = decode_activities(&payload.to_string()).expect("decode activities");
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].entity_type, EntityType::Budget);
    assert!(activities[0].involves(user));
    assert_eq!(
        activities[1].entity_type,
        EntityType::Other("Ethics approval".to_string())
    );
}

#[test]
fn decodes_members_and_derives_viewers() {
    let user = Uuid::new_v4();
    let payload = json!([
        {
            "id": Uuid::new_v4(),
            "user_id": user,
            "grant_id": Uuid::new_v4(),
            "roles": ["Principal Investigator", "Finance Officer"],
            "status": "Accepted"
        },
        {
            "id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "grant_id": Uuid::new_v4(),
            "status": "Pending"
        }
    ]);

    let members = decode_members(&payload.to_string()).expect("decode members");
    assert_eq!(members[0].status, MemberStatus::Accepted);
    assert!(members[0].roles.contains(&MemberRole::FinanceOfficer));
    assert!(members[1].roles.is_empty());

    let viewer = Viewer::from_member(&members[0]);
    assert_eq!(viewer.user_id, user);
    assert!(viewer.has_role(MemberRole::PrincipalInvestigator));
}

#[test]
fn rejects_accepted_member_without_roles() {
    let member_id = Uuid::new_v4();
    let payload = json!([
        {
            "id": member_id,
            "user_id": Uuid::new_v4(),
            "grant_id": Uuid::new_v4(),
            "roles": [],
            "status": "Accepted"
        }
    ]);

    let err = decode_members(&payload.to_string()).expect_err("invariant must hold");
    assert_eq!(
        err,
        SnapshotError::InvalidMember {
            member_id: member_id.to_string(),
            source: MemberValidationError::AcceptedWithoutRoles,
        }
    );
}

#[test]
fn rejects_unknown_member_role() {
    let payload = json!([
        {
            "id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "grant_id": Uuid::new_v4(),
            "roles": ["Dean"],
            "status": "Accepted"
        }
    ]);

    let err = decode_members(&payload.to_string()).expect_err("unknown role must fail");
    assert!(matches!(err, SnapshotError::InvalidJson { kind: "member", .. }));
}

#[test]
fn member_labels_decode_in_any_case() {
    let payload = json!([
        {
            "id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "grant_id": Uuid::new_v4(),
            "roles": ["finance officer", "PRINCIPAL INVESTIGATOR"],
            "status": "accepted"
        }
    ]);

    let members = decode_members(&payload.to_string()).expect("lowercase labels decode");
    assert_eq!(members[0].status, MemberStatus::Accepted);
    assert!(members[0].roles.contains(&MemberRole::FinanceOfficer));
    assert!(members[0].roles.contains(&MemberRole::PrincipalInvestigator));

    let encoded = serde_json::to_value(&members[0]).expect("encode member");
    assert_eq!(encoded["status"], "Accepted");
    assert_eq!(encoded["roles"][0], "Principal Investigator");
}
