//! Profile section: who is signed in plus the events they joined.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::registered_events::RegisteredEvents;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Clear the user and put the shell back on its default section, so the next
/// sign-in in this tab starts on the feed.
pub(crate) fn end_session(session: &mut SessionState, ui: &mut UiState) {
    session.sign_out();
    *ui = UiState::default();
}

#[component]
pub fn Profile() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let user_id = Signal::derive(move || session.with(|s| s.user_id().map(str::to_owned)));

    // The shell's unauth redirect takes over once the user is gone.
    let on_sign_out = move |_| {
        ui.update(|u| session.update(|s| end_session(s, u)));
    };

    view! {
        <section class="profile">
            <header class="profile__header">
                <div class="profile__avatar" aria-hidden="true">
                    {move || session.with(|s| s.display_name().chars().next().unwrap_or('?').to_string())}
                </div>
                <div>
                    <h2 class="profile__name">{move || session.with(SessionState::display_name)}</h2>
                    <p class="profile__role">{move || session.with(SessionState::role_label)}</p>
                </div>
                <button class="btn profile__sign-out" on:click=on_sign_out>"Sign out"</button>
            </header>
            <RegisteredEvents user_id=user_id/>
        </section>
    }
}
