//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the workspace policies to Dart via FRB as sync calls.
//! - Accept backend snapshots as the JSON strings the UI already holds.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures surface as envelope messages, never as exceptions.

use grantdesk_core::{
    core_version as core_version_inner, decode_activities, decode_subscription,
    filter_visible_activities, init_logging as init_logging_inner, initials as initials_inner,
    is_feature_allowed, is_premium_feature as is_premium_feature_inner, parse_role_set,
    parse_sections, premium_feature_message as premium_feature_message_inner,
    validate_role_update, visible_sections as visible_sections_inner, Activity,
    DepartmentSubscription, MemberStatus, RoleSet, Viewer, WorkspaceSection, WorkspaceService,
};
use log::warn;
use uuid::Uuid;

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Activity row returned to the feed widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub activity_id: String,
    /// Entity type label, e.g. `Budget` or an unknown backend value.
    pub entity_type: String,
    pub description: String,
    pub created_at: i64,
}

/// Response envelope for activity calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityListResponse {
    pub ok: bool,
    pub items: Vec<ActivityItem>,
    pub message: String,
}

/// Sidebar row returned to the navigation widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub label: String,
    pub locked: bool,
}

/// Response envelope for section list calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionListResponse {
    pub ok: bool,
    pub sections: Vec<String>,
    pub message: String,
}

/// Response envelope for sidebar calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarResponse {
    pub ok: bool,
    pub items: Vec<SidebarItem>,
    pub message: String,
}

impl ActivityListResponse {
    fn success(activities: Vec<Activity>) -> Self {
        let message = format!("{} visible activit(ies).", activities.len());
        Self {
            ok: true,
            items: activities.into_iter().map(to_activity_item).collect(),
            message,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            message: message.into(),
        }
    }
}

/// Filters an activity snapshot for the viewer, keeping snapshot order.
///
/// # FFI contract
/// - `viewer_id` is a UUID; `viewer_roles` are role labels.
/// - `activities_json` is the backend activity list payload.
#[flutter_rust_bridge::frb(sync)]
pub fn visible_activities(
    viewer_id: String,
    viewer_roles: Vec<String>,
    activities_json: String,
) -> ActivityListResponse {
    let viewer = match parse_viewer(&viewer_id, &viewer_roles) {
        Ok(viewer) => viewer,
        Err(err) => return ActivityListResponse::failure(format!("visible_activities failed: {err}")),
    };
    match decode_activities(&activities_json) {
        Ok(activities) => {
            ActivityListResponse::success(filter_visible_activities(&activities, &viewer))
        }
        Err(err) => ActivityListResponse::failure(format!("visible_activities failed: {err}")),
    }
}

/// Builds the dashboard feed: visible activities, newest first, limited.
///
/// # FFI contract
/// - `limit`: `None` or `0` means the default page size; values above the
///   maximum are clamped.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_feed(
    viewer_id: String,
    viewer_roles: Vec<String>,
    activities_json: String,
    limit: Option<u32>,
) -> ActivityListResponse {
    let viewer = match parse_viewer(&viewer_id, &viewer_roles) {
        Ok(viewer) => viewer,
        Err(err) => return ActivityListResponse::failure(format!("activity_feed failed: {err}")),
    };
    let activities = match decode_activities(&activities_json) {
        Ok(activities) => activities,
        Err(err) => return ActivityListResponse::failure(format!("activity_feed failed: {err}")),
    };
    let service = WorkspaceService::new(viewer, None);
    ActivityListResponse::success(
        service.activity_feed(&activities, limit.map(|value| value as usize)),
    )
}

/// Returns whether premium features are unlocked.
///
/// # FFI contract
/// - `None`, `"null"` and undecodable payloads all lock premium features.
#[flutter_rust_bridge::frb(sync)]
pub fn feature_allowed(subscription_json: Option<String>) -> bool {
    is_feature_allowed(resolve_subscription(subscription_json.as_deref()).as_ref())
}

/// Returns whether `name` is a premium feature label.
#[flutter_rust_bridge::frb(sync)]
pub fn is_premium_feature(name: String) -> bool {
    is_premium_feature_inner(&name)
}

/// Upgrade prompt for a locked premium feature.
#[flutter_rust_bridge::frb(sync)]
pub fn premium_feature_message(feature: String) -> String {
    premium_feature_message_inner(&feature)
}

/// Avatar initials for a display name; `?` when absent or empty.
#[flutter_rust_bridge::frb(sync)]
pub fn initials(name: Option<String>) -> String {
    initials_inner(name.as_deref())
}

/// Filters sidebar section labels by viewer roles, keeping input order.
#[flutter_rust_bridge::frb(sync)]
pub fn visible_sections(sections: Vec<String>, viewer_roles: Vec<String>) -> SectionListResponse {
    let parsed = parse_sections(&sections).and_then(|sections| {
        parse_role_set(&viewer_roles).map(|roles| (sections, roles))
    });
    match parsed {
        Ok((sections, roles)) => {
            let visible = visible_sections_inner(&sections, &roles);
            SectionListResponse {
                ok: true,
                message: format!("{} of {} section(s) visible.", visible.len(), sections.len()),
                sections: visible.iter().map(|section| section.label().to_string()).collect(),
            }
        }
        Err(err) => SectionListResponse {
            ok: false,
            sections: Vec::new(),
            message: format!("visible_sections failed: {err}"),
        },
    }
}

/// Builds sidebar rows in default order, marking locked premium sections.
#[flutter_rust_bridge::frb(sync)]
pub fn sidebar(
    viewer_id: String,
    viewer_roles: Vec<String>,
    subscription_json: Option<String>,
) -> SidebarResponse {
    let viewer = match parse_viewer(&viewer_id, &viewer_roles) {
        Ok(viewer) => viewer,
        Err(err) => {
            return SidebarResponse {
                ok: false,
                items: Vec::new(),
                message: format!("sidebar failed: {err}"),
            }
        }
    };
    let subscription = resolve_subscription(subscription_json.as_deref());
    let service = WorkspaceService::new(viewer, subscription);
    let items = service
        .sidebar(&WorkspaceSection::ALL)
        .into_iter()
        .map(|entry| SidebarItem {
            label: entry.section.label().to_string(),
            locked: entry.locked,
        })
        .collect::<Vec<_>>();
    SidebarResponse {
        ok: true,
        message: format!("{} sidebar item(s).", items.len()),
        items,
    }
}

/// Checks a member role update before it is sent to the backend.
///
/// # FFI contract
/// - Returns empty string when the update is consistent, otherwise a
///   human-readable reason.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_member_roles(status: String, roles: Vec<String>) -> String {
    let status = match MemberStatus::parse(&status) {
        Ok(status) => status,
        Err(err) => return err.to_string(),
    };
    let roles = match parse_role_set(&roles) {
        Ok(roles) => roles,
        Err(err) => return err.to_string(),
    };
    match validate_role_update(status, &roles) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

fn parse_viewer(viewer_id: &str, viewer_roles: &[String]) -> Result<Viewer, String> {
    let user_id = Uuid::parse_str(viewer_id.trim())
        .map_err(|err| format!("invalid viewer id `{}`: {err}", viewer_id.trim()))?;
    let roles: RoleSet = parse_role_set(viewer_roles).map_err(|err| err.to_string())?;
    Ok(Viewer::new(user_id, roles))
}

fn resolve_subscription(json: Option<&str>) -> Option<DepartmentSubscription> {
    let json = json?;
    match decode_subscription(json) {
        Ok(subscription) => subscription,
        Err(err) => {
            warn!("event=subscription_fallback module=ffi status=locked reason={err}");
            None
        }
    }
}

fn to_activity_item(activity: Activity) -> ActivityItem {
    ActivityItem {
        activity_id: activity.id.to_string(),
        entity_type: activity.entity_type.label().to_string(),
        description: activity.description,
        created_at: activity.created_at,
    }
}
