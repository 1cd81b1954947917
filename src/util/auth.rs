//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed-in routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";

pub(crate) fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_signed_in()
}

/// Redirect to `/login` whenever no user is signed in.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
