//! Decoding of backend JSON snapshots.
//!
//! # Responsibility
//! - Turn backend payloads into typed model records.
//! - Report undecodable payloads with the payload kind attached.
//!
//! # Invariants
//! - A `null` subscription payload decodes to `None`, never an error.
//! - Member payloads pass `Member::validate` or are rejected as a whole.

use crate::model::activity::Activity;
use crate::model::member::{Member, MemberValidationError};
use crate::model::subscription::DepartmentSubscription;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Snapshot decoding errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    InvalidJson {
        kind: &'static str,
        message: String,
    },
    InvalidMember {
        member_id: String,
        source: MemberValidationError,
    },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson { kind, message } => {
                write!(f, "invalid {kind} snapshot: {message}")
            }
            Self::InvalidMember { member_id, source } => {
                write!(f, "invalid member snapshot `{member_id}`: {source}")
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson { .. } => None,
            Self::InvalidMember { source, .. } => Some(source),
        }
    }
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Decodes an activity list payload.
pub fn decode_activities(json: &str) -> SnapshotResult<Vec<Activity>> {
    decode("activity", json)
}

/// Decodes a member list payload and validates every member.
pub fn decode_members(json: &str) -> SnapshotResult<Vec<Member>> {
    let members: Vec<Member> = decode("member", json)?;
    for member in &members {
        member
            .validate()
            .map_err(|source| SnapshotError::InvalidMember {
                member_id: member.id.to_string(),
                source,
            })?;
    }
    Ok(members)
}

/// Decodes a subscription payload; `null` means the department has none.
pub fn decode_subscription(json: &str) -> SnapshotResult<Option<DepartmentSubscription>> {
    decode("subscription", json)
}

fn decode<T: serde::de::DeserializeOwned>(kind: &'static str, json: &str) -> SnapshotResult<T> {
    serde_json::from_str(json).map_err(|err| {
        warn!(
            "event=snapshot_decode module=snapshot status=error kind={} line={} column={}",
            kind,
            err.line(),
            err.column()
        );
        SnapshotError::InvalidJson {
            kind,
            message: err.to_string(),
        }
    })
}
