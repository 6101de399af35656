//! Grant member roles.

use crate::model::label::{deserialize_label, parse_label, LabelParseError};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Role a member holds on one grant.
///
/// Serialized as its display label; decoding is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemberRole {
    PrincipalInvestigator,
    Researcher,
    Reviewer,
    FinanceOfficer,
}

/// Set of roles held by one member or viewer.
pub type RoleSet = BTreeSet<MemberRole>;

/// Roles that see every non-personnel, non-task activity regardless of involvement.
pub const BUDGET_PRIVILEGED_ROLES: &[MemberRole] = &[
    MemberRole::PrincipalInvestigator,
    MemberRole::Reviewer,
    MemberRole::FinanceOfficer,
];

const ROLE_LABELS: &[(&str, MemberRole)] = &[
    ("Principal Investigator", MemberRole::PrincipalInvestigator),
    ("Researcher", MemberRole::Researcher),
    ("Reviewer", MemberRole::Reviewer),
    ("Finance Officer", MemberRole::FinanceOfficer),
];

impl MemberRole {
    /// Stable display label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::PrincipalInvestigator => "Principal Investigator",
            Self::Researcher => "Researcher",
            Self::Reviewer => "Reviewer",
            Self::FinanceOfficer => "Finance Officer",
        }
    }

    /// Parses a role from its display label (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, LabelParseError> {
        parse_label("role", value, ROLE_LABELS)
    }

    /// All roles in declaration order.
    pub fn all() -> [Self; 4] {
        [
            Self::PrincipalInvestigator,
            Self::Researcher,
            Self::Reviewer,
            Self::FinanceOfficer,
        ]
    }
}

impl Serialize for MemberRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for MemberRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_label(deserializer, "role", ROLE_LABELS)
    }
}

/// Parses a list of role labels into a set, failing on the first unknown label.
pub fn parse_role_set<S: AsRef<str>>(labels: &[S]) -> Result<RoleSet, LabelParseError> {
    labels
        .iter()
        .map(|label| MemberRole::parse(label.as_ref()))
        .collect()
}

/// Returns whether `roles` contains any of `wanted`.
pub fn has_any_role(roles: &RoleSet, wanted: &[MemberRole]) -> bool {
    wanted.iter().any(|role| roles.contains(role))
}
