//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{ApiConfig, FeedConfig};
use crate::pages::{
    event_detail::EventDetailPage, login::LoginPage, main_page::MainPage, signup::SignupPage, welcome::WelcomePage,
};
use crate::state::{session::SessionState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, shell chrome state and client configuration, then
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(ApiConfig::from_build_env());
    provide_context(FeedConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/club-portal.css"/>
        <Title text="Club Management Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WelcomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("main") view=MainPage/>
                <Route path=(StaticSegment("events"), ParamSegment("event_id")) view=EventDetailPage/>
            </Routes>
        </Router>
    }
}
