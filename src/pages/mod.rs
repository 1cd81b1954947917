//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod create_event;
pub mod event_detail;
pub mod login;
pub mod main_page;
pub mod signup;
pub mod welcome;
