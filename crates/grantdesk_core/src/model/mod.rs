//! Typed snapshot model for grant workspace data.
//!
//! # Responsibility
//! - Define closed, explicitly tagged records for backend snapshots.
//! - Keep wire labels stable so UI and backend payloads decode the same way.
//!
//! # Invariants
//! - Records are read-only snapshots; this crate never mutates backend state.
//! - Unknown activity entity types decode into `EntityType::Other`, never an error.

pub mod activity;
pub mod label;
pub mod member;
pub mod role;
pub mod section;
pub mod subscription;
