//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (observers, file inputs, redirects)
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod sentinel;
pub mod upload;
