//! Role-based visibility of activity feed entries.

use crate::model::activity::{Activity, EntityType};
use crate::model::role::{MemberRole, BUDGET_PRIVILEGED_ROLES};
use crate::session::Viewer;

/// Returns whether `viewer` may see `activity`.
///
/// Rules apply in order and the first match decides:
/// 1. Personnel: principal investigators only.
/// 2. Task: involved users only.
/// 3. Budget-privileged roles see everything else.
/// 4. Involved users see everything else.
/// 5. Budget and transaction entries are hidden from everyone left.
/// 6. Anything else is visible.
pub fn is_activity_visible(activity: &Activity, viewer: &Viewer) -> bool {
    match activity.entity_type {
        EntityType::Personnel => viewer.has_role(MemberRole::PrincipalInvestigator),
        EntityType::Task => activity.involves(viewer.user_id),
        _ if viewer.has_any_role(BUDGET_PRIVILEGED_ROLES) => true,
        _ if activity.involves(viewer.user_id) => true,
        ref kind if kind.is_financial() => false,
        _ => true,
    }
}

/// Returns the activities visible to `viewer`, in input order.
pub fn filter_visible_activities(activities: &[Activity], viewer: &Viewer) -> Vec<Activity> {
    activities
        .iter()
        .filter(|activity| is_activity_visible(activity, viewer))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::is_activity_visible;
    use crate::model::activity::{Activity, EntityType};
    use crate::model::role::MemberRole;
    use crate::session::Viewer;
    use uuid::Uuid;

    #[test]
    fn personnel_ignores_involvement() {
        let viewer = Viewer::new(Uuid::new_v4(), [MemberRole::Reviewer]);
        let activity = Activity::new(EntityType::Personnel, "added member", 1)
            .with_involved_users([viewer.user_id]);
        assert!(!is_activity_visible(&activity, &viewer));
    }

    #[test]
    fn task_ignores_privileged_roles() {
        let viewer = Viewer::new(Uuid::new_v4(), [MemberRole::PrincipalInvestigator]);
        let activity = Activity::new(EntityType::Task, "assigned task", 1);
        assert!(!is_activity_visible(&activity, &viewer));
    }

    #[test]
    fn involved_researcher_sees_budget_entry() {
        let viewer = Viewer::new(Uuid::new_v4(), [MemberRole::Researcher]);
        let activity = Activity::new(EntityType::Budget, "adjusted line", 1)
            .with_involved_users([viewer.user_id]);
        assert!(is_activity_visible(&activity, &viewer));
    }
}
