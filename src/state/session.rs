//! Signed-in user for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<SessionState>` via context. The login page
//! calls `sign_in`, logout calls `sign_out`, and route guards and views read
//! it through `expect_context` rather than any global.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, SessionUser};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
}

impl SessionState {
    pub fn sign_in(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    /// Admin-only controls are gated on the `admin` role exactly.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.name.clone())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Club Member".to_owned())
    }

    pub fn role_label(&self) -> &'static str {
        self.user.as_ref().map_or("Guest", |u| u.role.label())
    }
}
