//! Signed-in shell (`/main`): navigation plus the active section.
//!
//! ARCHITECTURE
//! ============
//! Desktop shows `LeftNav` in a sidebar; narrow screens get a header with a
//! drawer holding the same component in its mobile variant. Only the active
//! section is mounted, so leaving the feed tears down its loader and observer
//! and coming back starts from page 1.

use leptos::prelude::*;

use crate::components::feed::Feed;
use crate::components::nav::{LeftNav, NavVariant};
use crate::components::profile::Profile;
use crate::components::scrapbook::Scrapbook;
use crate::pages::create_event::CreateEventForm;
use crate::state::session::SessionState;
use crate::state::ui::{Section, UiState};

#[component]
pub fn MainPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let section = Memo::new(move |_| ui.with(|u| u.section));
    let drawer_open = Memo::new(move |_| ui.with(|u| u.mobile_nav_open));

    #[cfg(feature = "hydrate")]
    crate::util::auth::install_unauth_redirect(session, leptos_router::hooks::use_navigate());

    let content = move || match section.get() {
        Section::Feed => view! { <Feed/> }.into_any(),
        Section::Events => view! { <CreateEventForm/> }.into_any(),
        Section::Profile => view! { <Profile/> }.into_any(),
        Section::Scrapbook => view! { <Scrapbook/> }.into_any(),
    };

    view! {
        <Show when=move || session.with(SessionState::is_signed_in)>
            <div class="main-shell">
                <header class="main-shell__mobile-header">
                    <h1 class="main-shell__brand">"CCCM"</h1>
                    <button
                        class="main-shell__menu"
                        aria-label="Open navigation"
                        on:click=move |_| ui.update(|u| u.mobile_nav_open = true)
                    >
                        "☰"
                    </button>
                </header>
                <Show when=move || drawer_open.get()>
                    <div class="main-shell__overlay" on:click=move |_| ui.update(|u| u.mobile_nav_open = false)></div>
                    <div class="main-shell__drawer">
                        <button class="main-shell__close" on:click=move |_| ui.update(|u| u.mobile_nav_open = false)>
                            "Close"
                        </button>
                        <LeftNav variant=NavVariant::Mobile/>
                    </div>
                </Show>
                <aside class="main-shell__sidebar">
                    <LeftNav variant=NavVariant::Desktop/>
                </aside>
                <main class="main-shell__content">{content}</main>
            </div>
        </Show>
    }
}
