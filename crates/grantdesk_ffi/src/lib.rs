//! Flutter bridge crate for grantdesk core.
//!
//! # Responsibility
//! - Host the FRB-exported use-case API in `api`.
//! - Keep all policy logic in `grantdesk_core`.

pub mod api;
