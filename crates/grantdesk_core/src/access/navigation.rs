//! Role-based filtering of workspace sections.

use crate::model::role::{has_any_role, MemberRole, RoleSet};
use crate::model::section::WorkspaceSection;
use std::collections::BTreeSet;

/// Sections every accepted role may open.
const BASE_SECTIONS: &[WorkspaceSection] =
    &[WorkspaceSection::Dashboard, WorkspaceSection::Documents];

const RESEARCHER_SECTIONS: &[WorkspaceSection] = &[
    WorkspaceSection::Milestones,
    WorkspaceSection::Deliverables,
    WorkspaceSection::Personnel,
];

/// Roles that may open every section.
const FULL_ACCESS_ROLES: &[MemberRole] =
    &[MemberRole::PrincipalInvestigator, MemberRole::Reviewer];

/// Returns the sections of `all_sections` that `roles` may open, in input order.
pub fn visible_sections(
    all_sections: &[WorkspaceSection],
    roles: &RoleSet,
) -> Vec<WorkspaceSection> {
    if has_any_role(roles, FULL_ACCESS_ROLES) {
        return all_sections.to_vec();
    }

    let allowed = allowed_sections(roles);
    all_sections
        .iter()
        .copied()
        .filter(|section| allowed.contains(section))
        .collect()
}

/// Returns whether `roles` may open `section`.
pub fn can_open_section(section: WorkspaceSection, roles: &RoleSet) -> bool {
    has_any_role(roles, FULL_ACCESS_ROLES) || allowed_sections(roles).contains(&section)
}

fn allowed_sections(roles: &RoleSet) -> BTreeSet<WorkspaceSection> {
    let mut allowed: BTreeSet<WorkspaceSection> = BASE_SECTIONS.iter().copied().collect();
    // Unreachable while principal investigators take the full-access path.
    if roles.contains(&MemberRole::PrincipalInvestigator) {
        allowed.insert(WorkspaceSection::Settings);
    }
    if roles.contains(&MemberRole::FinanceOfficer) {
        allowed.insert(WorkspaceSection::BudgetTracker);
    }
    if roles.contains(&MemberRole::Researcher) {
        allowed.extend(RESEARCHER_SECTIONS.iter().copied());
    }
    allowed
}

#[cfg(test)]
mod tests {
    use super::{allowed_sections, can_open_section};
    use crate::model::role::{MemberRole, RoleSet};
    use crate::model::section::WorkspaceSection;

    #[test]
    fn no_roles_still_allows_base_sections() {
        let allowed = allowed_sections(&RoleSet::new());
        assert_eq!(allowed.len(), 2);
        assert!(allowed.contains(&WorkspaceSection::Dashboard));
        assert!(allowed.contains(&WorkspaceSection::Documents));
    }

    #[test]
    fn finance_officer_gets_budget_tracker_only() {
        let roles = RoleSet::from([MemberRole::FinanceOfficer]);
        assert!(can_open_section(WorkspaceSection::BudgetTracker, &roles));
        assert!(!can_open_section(WorkspaceSection::Milestones, &roles));
        assert!(!can_open_section(WorkspaceSection::Settings, &roles));
    }

    #[test]
    fn reviewer_opens_settings() {
        let roles = RoleSet::from([MemberRole::Reviewer]);
        assert!(can_open_section(WorkspaceSection::Settings, &roles));
    }
}
