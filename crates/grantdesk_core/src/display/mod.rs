//! Display helpers for UI rendering.

pub mod initials;
