//! Subscription gating of premium workspace features.

use crate::model::section::WorkspaceSection;
use crate::model::subscription::{DepartmentSubscription, SubscriptionStatus};

/// Sections that require an active department subscription.
pub const PREMIUM_SECTIONS: &[WorkspaceSection] = &[
    WorkspaceSection::BudgetTracker,
    WorkspaceSection::Milestones,
    WorkspaceSection::Deliverables,
    WorkspaceSection::Documents,
];

/// Returns whether premium features are unlocked by `subscription`.
///
/// An absent subscription or an inactive status locks them. The plan does
/// not participate.
pub fn is_feature_allowed(subscription: Option<&DepartmentSubscription>) -> bool {
    match subscription {
        Some(subscription) => subscription.status != SubscriptionStatus::Inactive,
        None => false,
    }
}

/// Returns whether `name` is the exact label of a premium feature.
pub fn is_premium_feature(name: &str) -> bool {
    PREMIUM_SECTIONS
        .iter()
        .any(|section| section.label() == name)
}

/// Returns whether `section` requires an active subscription.
pub fn is_premium_section(section: WorkspaceSection) -> bool {
    PREMIUM_SECTIONS.contains(&section)
}

/// Upgrade prompt shown when a locked premium feature is opened.
pub fn premium_feature_message(feature: &str) -> String {
    format!(
        "{feature} is a premium feature. Ask your department administrator to activate a Standard subscription to unlock it."
    )
}
