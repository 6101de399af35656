//! Activity (audit event) snapshot model.
//!
//! # Responsibility
//! - Describe one audit event tied to a grant entity.
//! - Map backend entity-type strings onto a closed enum with a catch-all.
//!
//! # Invariants
//! - Activities are immutable; this layer filters, never mutates them.
//! - Entity-type decoding is total: unknown labels become `EntityType::Other`.

use crate::model::member::UserId;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an activity record.
pub type ActivityId = Uuid;

/// Kind of grant entity an activity refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityType {
    Personnel,
    Task,
    Budget,
    Transaction,
    Deliverable,
    Document,
    Milestone,
    /// Entity type this client does not know; kept verbatim (trimmed).
    Other(String),
}

const KNOWN_ENTITY_TYPES: &[(&str, EntityType)] = &[
    ("Personnel", EntityType::Personnel),
    ("Task", EntityType::Task),
    ("Budget", EntityType::Budget),
    ("Transaction", EntityType::Transaction),
    ("Deliverable", EntityType::Deliverable),
    ("Document", EntityType::Document),
    ("Milestone", EntityType::Milestone),
];

impl EntityType {
    /// Maps a backend label onto a known type, falling back to `Other`.
    pub fn from_label(value: &str) -> Self {
        let normalized = value.trim();
        KNOWN_ENTITY_TYPES
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(normalized))
            .map(|(_, kind)| kind.clone())
            .unwrap_or_else(|| Self::Other(normalized.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Personnel => "Personnel",
            Self::Task => "Task",
            Self::Budget => "Budget",
            Self::Transaction => "Transaction",
            Self::Deliverable => "Deliverable",
            Self::Document => "Document",
            Self::Milestone => "Milestone",
            Self::Other(label) => label.as_str(),
        }
    }

    /// Financial entity types hidden from uninvolved, unprivileged viewers.
    pub fn is_financial(&self) -> bool {
        matches!(self, Self::Budget | Self::Transaction)
    }
}

impl Serialize for EntityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for EntityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_label(&raw))
    }
}

/// Audit event snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub entity_type: EntityType,
    pub description: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// `None` and an empty list mean the same thing: nobody is involved.
    #[serde(default)]
    pub involved_users: Option<Vec<UserId>>,
}

impl Activity {
    /// Creates an activity with a generated ID and no involved users.
    pub fn new(entity_type: EntityType, description: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type,
            description: description.into(),
            created_at,
            involved_users: None,
        }
    }

    /// Returns a copy listing `users` as involved.
    pub fn with_involved_users(mut self, users: impl IntoIterator<Item = UserId>) -> Self {
        self.involved_users = Some(users.into_iter().collect());
        self
    }

    /// Returns whether `user_id` appears in the involved-users list.
    pub fn involves(&self, user_id: UserId) -> bool {
        self.involved_users
            .as_deref()
            .is_some_and(|users| users.contains(&user_id))
    }
}
