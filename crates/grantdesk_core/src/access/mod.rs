//! Role and subscription access policies.
//!
//! # Responsibility
//! - Decide which activities, sections and premium features a viewer may see.
//!
//! # Invariants
//! - Every policy is a pure, total function over the snapshots it is handed.
//! - Filters preserve input order and are idempotent.

pub mod activity_visibility;
pub mod navigation;
pub mod premium;
