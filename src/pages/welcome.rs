//! Landing page with entry points to login and signup.

use leptos::prelude::*;

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="welcome-page">
            <div class="welcome-page__card">
                <h1>"Welcome to Club Management Portal"</h1>
                <p class="welcome-page__tagline">
                    "Streamline your campus club experience. Join events, manage teams, and stay connected in one place."
                </p>
                <div class="welcome-page__actions">
                    <a class="btn btn--primary" href="/login">"Login"</a>
                    <a class="btn btn--outline" href="/signup">"Sign Up"</a>
                </div>
            </div>
        </div>
    }
}
