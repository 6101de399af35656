//! Workspace use-case service.
//!
//! # Responsibility
//! - Compose activity, navigation and premium policies for one viewer.
//! - Give the UI ready-to-render feed and sidebar projections.
//!
//! # Invariants
//! - The service holds snapshots only; it never calls the backend.
//! - Feed ordering is newest first and stable for equal timestamps.

use crate::access::activity_visibility::is_activity_visible;
use crate::access::navigation::{can_open_section, visible_sections};
use crate::access::premium::{is_feature_allowed, is_premium_section, premium_feature_message};
use crate::model::activity::Activity;
use crate::model::section::WorkspaceSection;
use crate::model::subscription::DepartmentSubscription;
use crate::session::Viewer;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Feed length used when the caller passes no limit (or zero).
pub const FEED_DEFAULT_LIMIT: usize = 20;
/// Upper bound on one feed page.
pub const FEED_LIMIT_MAX: usize = 100;

/// One sidebar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarEntry {
    pub section: WorkspaceSection,
    /// Visible but requires an active subscription to open.
    pub locked: bool,
}

/// Reasons a section cannot be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    SectionHidden(WorkspaceSection),
    PremiumLocked {
        section: WorkspaceSection,
        message: String,
    },
}

impl Display for AccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SectionHidden(section) => {
                write!(f, "section is not available for your roles: {}", section.label())
            }
            Self::PremiumLocked { message, .. } => write!(f, "{message}"),
        }
    }
}

impl Error for AccessError {}

/// Policy facade for one viewer on one grant.
pub struct WorkspaceService {
    viewer: Viewer,
    subscription: Option<DepartmentSubscription>,
}

impl WorkspaceService {
    pub fn new(viewer: Viewer, subscription: Option<DepartmentSubscription>) -> Self {
        Self {
            viewer,
            subscription,
        }
    }

    /// Returns whether premium features are unlocked for this workspace.
    pub fn premium_unlocked(&self) -> bool {
        is_feature_allowed(self.subscription.as_ref())
    }

    /// Returns visible activities, newest first, capped at the normalized limit.
    pub fn activity_feed(&self, activities: &[Activity], limit: Option<usize>) -> Vec<Activity> {
        let limit = normalize_feed_limit(limit);
        let mut visible: Vec<&Activity> = activities
            .iter()
            .filter(|activity| is_activity_visible(activity, &self.viewer))
            .collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        debug!(
            "event=activity_feed module=service status=ok total={} visible={} limit={}",
            activities.len(),
            visible.len(),
            limit
        );
        visible.into_iter().take(limit).cloned().collect()
    }

    /// Returns the sidebar rows for `all_sections`, in input order.
    pub fn sidebar(&self, all_sections: &[WorkspaceSection]) -> Vec<SidebarEntry> {
        let unlocked = self.premium_unlocked();
        let entries: Vec<SidebarEntry> = visible_sections(all_sections, &self.viewer.roles)
            .into_iter()
            .map(|section| SidebarEntry {
                section,
                locked: is_premium_section(section) && !unlocked,
            })
            .collect();

        debug!(
            "event=sidebar module=service status=ok requested={} visible={} premium_unlocked={}",
            all_sections.len(),
            entries.len(),
            unlocked
        );
        entries
    }

    /// Checks whether the viewer may open `section` right now.
    pub fn open_section(&self, section: WorkspaceSection) -> Result<(), AccessError> {
        let result = if !can_open_section(section, &self.viewer.roles) {
            Err(AccessError::SectionHidden(section))
        } else if is_premium_section(section) && !self.premium_unlocked() {
            Err(AccessError::PremiumLocked {
                section,
                message: premium_feature_message(section.label()),
            })
        } else {
            Ok(())
        };

        debug!(
            "event=open_section module=service status={} section={}",
            if result.is_ok() { "ok" } else { "denied" },
            section.label()
        );
        result
    }
}

/// Maps a caller-supplied feed limit onto `1..=FEED_LIMIT_MAX`.
pub fn normalize_feed_limit(limit: Option<usize>) -> usize {
    match limit {
        Some(0) | None => FEED_DEFAULT_LIMIT,
        Some(value) if value > FEED_LIMIT_MAX => FEED_LIMIT_MAX,
        Some(value) => value,
    }
}
