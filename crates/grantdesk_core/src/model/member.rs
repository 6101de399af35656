//! Grant member snapshot model.
//!
//! # Responsibility
//! - Describe one user's role-and-status association with a grant.
//! - Check the role-set invariant before the UI issues a role update.
//!
//! # Invariants
//! - An `Accepted` member holds at least one role.
//! - The check here is advisory; the backend remains authoritative.

use crate::model::label::{deserialize_label, parse_label, LabelParseError};
use crate::model::role::RoleSet;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a platform user.
pub type UserId = Uuid;
/// Stable identifier of a grant membership record.
pub type MemberId = Uuid;
/// Stable identifier of a grant.
pub type GrantId = Uuid;

/// Invitation lifecycle of a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Pending,
    Accepted,
    Rejected,
}

const STATUS_LABELS: &[(&str, MemberStatus)] = &[
    ("Pending", MemberStatus::Pending),
    ("Accepted", MemberStatus::Accepted),
    ("Rejected", MemberStatus::Rejected),
];

impl MemberStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Parses a status from its display label (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, LabelParseError> {
        parse_label("member status", value, STATUS_LABELS)
    }
}

impl Serialize for MemberStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for MemberStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_label(deserializer, "member status", STATUS_LABELS)
    }
}

/// Snapshot of one grant membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub user_id: UserId,
    pub grant_id: GrantId,
    #[serde(default)]
    pub roles: RoleSet,
    pub status: MemberStatus,
}

impl Member {
    /// Creates a pending member with no roles and a generated ID.
    pub fn invited(user_id: UserId, grant_id: GrantId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            grant_id,
            roles: RoleSet::new(),
            status: MemberStatus::Pending,
        }
    }

    /// Returns whether the membership grants workspace access.
    pub fn is_accepted(&self) -> bool {
        self.status == MemberStatus::Accepted
    }

    /// Validates snapshot-level invariants.
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        validate_role_update(self.status, &self.roles)
    }
}

/// Checks that a role update keeps the member consistent.
///
/// Pending and rejected members may hold no roles; accepted members may not.
pub fn validate_role_update(
    status: MemberStatus,
    roles: &RoleSet,
) -> Result<(), MemberValidationError> {
    if status == MemberStatus::Accepted && roles.is_empty() {
        return Err(MemberValidationError::AcceptedWithoutRoles);
    }
    Ok(())
}

/// Member invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    AcceptedWithoutRoles,
}

impl Display for MemberValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AcceptedWithoutRoles => {
                write!(f, "an accepted member must hold at least one role")
            }
        }
    }
}

impl Error for MemberValidationError {}

#[cfg(test)]
mod tests {
    use super::{validate_role_update, MemberStatus, MemberValidationError};
    use crate::model::role::{MemberRole, RoleSet};

    #[test]
    fn accepted_member_requires_a_role() {
        let err = validate_role_update(MemberStatus::Accepted, &RoleSet::new())
            .expect_err("empty role set must be rejected");
        assert_eq!(err, MemberValidationError::AcceptedWithoutRoles);

        let roles = RoleSet::from([MemberRole::Researcher]);
        validate_role_update(MemberStatus::Accepted, &roles).expect("one role is enough");
    }

    #[test]
    fn pending_and_rejected_members_may_hold_no_roles() {
        validate_role_update(MemberStatus::Pending, &RoleSet::new()).expect("pending");
        validate_role_update(MemberStatus::Rejected, &RoleSet::new()).expect("rejected");
    }

    #[test]
    fn status_parse_accepts_any_case() {
        assert_eq!(MemberStatus::parse("accepted"), Ok(MemberStatus::Accepted));
        assert!(MemberStatus::parse("archived").is_err());
    }
}
