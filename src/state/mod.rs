//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `feed`, `ui`, `gallery`) and kept free
//! of browser types so each model is testable natively.

pub mod feed;
pub mod gallery;
pub mod session;
pub mod ui;
