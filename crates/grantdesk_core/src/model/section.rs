//! Workspace sections shown in the grant sidebar.

use crate::model::label::{deserialize_label, parse_label, LabelParseError};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// One navigable area of a grant workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkspaceSection {
    Dashboard,
    BudgetTracker,
    Milestones,
    Deliverables,
    Personnel,
    Documents,
    Settings,
}

const SECTION_LABELS: &[(&str, WorkspaceSection)] = &[
    ("Dashboard", WorkspaceSection::Dashboard),
    ("Budget tracker", WorkspaceSection::BudgetTracker),
    ("Milestones", WorkspaceSection::Milestones),
    ("Deliverables", WorkspaceSection::Deliverables),
    ("Personnel", WorkspaceSection::Personnel),
    ("Documents", WorkspaceSection::Documents),
    ("Settings", WorkspaceSection::Settings),
];

impl WorkspaceSection {
    /// Sidebar order used when the UI does not supply its own list.
    pub const ALL: [Self; 7] = [
        Self::Dashboard,
        Self::BudgetTracker,
        Self::Milestones,
        Self::Deliverables,
        Self::Personnel,
        Self::Documents,
        Self::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::BudgetTracker => "Budget tracker",
            Self::Milestones => "Milestones",
            Self::Deliverables => "Deliverables",
            Self::Personnel => "Personnel",
            Self::Documents => "Documents",
            Self::Settings => "Settings",
        }
    }

    pub fn parse(value: &str) -> Result<Self, LabelParseError> {
        parse_label("workspace section", value, SECTION_LABELS)
    }
}

impl Serialize for WorkspaceSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for WorkspaceSection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_label(deserializer, "workspace section", SECTION_LABELS)
    }
}

/// Parses sidebar labels, preserving order and duplicates.
pub fn parse_sections<S: AsRef<str>>(
    labels: &[S],
) -> Result<Vec<WorkspaceSection>, LabelParseError> {
    labels
        .iter()
        .map(|label| WorkspaceSection::parse(label.as_ref()))
        .collect()
}
