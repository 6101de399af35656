//! Use-case services over snapshot policies.
//!
//! # Responsibility
//! - Expose UI-facing entry points that combine model and access policies.

pub mod workspace_service;
