//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the main shell's sections and shared widgets, reading and
//! writing session and shell state from Leptos context providers.

pub mod event_card;
pub mod feed;
pub mod image_uploader;
pub mod lightbox;
pub mod nav;
pub mod profile;
pub mod registered_events;
pub mod scrapbook;
