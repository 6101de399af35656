//! Department subscription snapshot model.

use crate::model::label::{parse_label, LabelParseError};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Billing plan of a department.
///
/// Informational only; gating reads the status. Decoding never fails: a
/// missing, blank or unknown plan is `Free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionPlan {
    #[default]
    Free,
    Standard,
}

const PLAN_LABELS: &[(&str, SubscriptionPlan)] = &[
    ("Free", SubscriptionPlan::Free),
    ("Standard", SubscriptionPlan::Standard),
];

impl SubscriptionPlan {
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Standard => "Standard",
        }
    }

    pub fn parse(value: &str) -> Result<Self, LabelParseError> {
        parse_label("subscription plan", value, PLAN_LABELS)
    }
}

impl Serialize for SubscriptionPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for SubscriptionPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .and_then(|value| Self::parse(value).ok())
            .unwrap_or_default())
    }
}

/// Billing status of a department subscription.
///
/// Decoding never fails: a missing, blank or unknown status is `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionStatus {
    Active,
    #[default]
    Inactive,
}

impl SubscriptionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Lenient mapping used for backend payloads.
    pub fn from_label(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("active") {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

impl Serialize for SubscriptionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for SubscriptionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(Self::from_label)
            .unwrap_or_default())
    }
}

/// Snapshot of the subscription that gates premium features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DepartmentSubscription {
    #[serde(default)]
    pub plan: SubscriptionPlan,
    #[serde(default)]
    pub status: SubscriptionStatus,
}

impl DepartmentSubscription {
    pub fn new(plan: SubscriptionPlan, status: SubscriptionStatus) -> Self {
        Self { plan, status }
    }
}
