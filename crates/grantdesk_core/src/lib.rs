//! Core client-side policy logic for the grant workspace.
//! The UI renders from backend snapshots; this crate decides what a viewer
//! may see in them.

pub mod access;
pub mod display;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;
pub mod snapshot;

pub use access::activity_visibility::{filter_visible_activities, is_activity_visible};
pub use access::navigation::{can_open_section, visible_sections};
pub use access::premium::{
    is_feature_allowed, is_premium_feature, is_premium_section, premium_feature_message,
    PREMIUM_SECTIONS,
};
pub use display::initials::{initials, UNKNOWN_INITIALS};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings};
pub use model::activity::{Activity, ActivityId, EntityType};
pub use model::label::LabelParseError;
pub use model::member::{
    validate_role_update, GrantId, Member, MemberId, MemberStatus, MemberValidationError, UserId,
};
pub use model::role::{parse_role_set, MemberRole, RoleSet, BUDGET_PRIVILEGED_ROLES};
pub use model::section::{parse_sections, WorkspaceSection};
pub use model::subscription::{DepartmentSubscription, SubscriptionPlan, SubscriptionStatus};
pub use service::workspace_service::{
    normalize_feed_limit, AccessError, SidebarEntry, WorkspaceService, FEED_DEFAULT_LIMIT,
    FEED_LIMIT_MAX,
};
pub use session::Viewer;
pub use snapshot::{
    decode_activities, decode_members, decode_subscription, SnapshotError, SnapshotResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
