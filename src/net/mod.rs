//! Networking modules for the club backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls, `types` defines the wire schema, and `error`
//! carries failures up to the views.

pub mod api;
pub mod error;
pub mod types;
