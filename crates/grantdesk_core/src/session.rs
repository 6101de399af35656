//! Explicit viewer context passed into every policy call.

use crate::model::member::{Member, UserId};
use crate::model::role::{has_any_role, MemberRole, RoleSet};

/// The signed-in user and the roles they hold on the grant being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: UserId,
    pub roles: RoleSet,
}

impl Viewer {
    pub fn new(user_id: UserId, roles: impl IntoIterator<Item = MemberRole>) -> Self {
        Self {
            user_id,
            roles: roles.into_iter().collect(),
        }
    }

    /// Derives the viewer from a membership snapshot.
    ///
    /// Only accepted memberships contribute roles; pending and rejected ones
    /// yield an empty role set.
    pub fn from_member(member: &Member) -> Self {
        let roles = if member.is_accepted() {
            member.roles.clone()
        } else {
            RoleSet::new()
        };
        Self {
            user_id: member.user_id,
            roles,
        }
    }

    pub fn has_role(&self, role: MemberRole) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[MemberRole]) -> bool {
        has_any_role(&self.roles, roles)
    }
}

#[cfg(test)]
mod tests {
    use super::Viewer;
    use crate::model::member::{Member, MemberStatus};
    use crate::model::role::MemberRole;
    use uuid::Uuid;

    #[test]
    fn accepted_member_contributes_roles() {
        let mut member = Member::invited(Uuid::new_v4(), Uuid::new_v4());
        member.roles.insert(MemberRole::Reviewer);
        member.status = MemberStatus::Accepted;

        let viewer = Viewer::from_member(&member);
        assert_eq!(viewer.user_id, member.user_id);
        assert!(viewer.has_role(MemberRole::Reviewer));
    }

    #[test]
    fn pending_member_has_no_roles() {
        let mut member = Member::invited(Uuid::new_v4(), Uuid::new_v4());
        member.roles.insert(MemberRole::PrincipalInvestigator);

        let viewer = Viewer::from_member(&member);
        assert!(viewer.roles.is_empty());
    }
}
