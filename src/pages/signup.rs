//! Account registration.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::types::{Role, SignupRequest, Year};

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub year: Option<Year>,
}

pub(crate) fn validate_signup(form: &SignupForm) -> Result<SignupRequest, &'static str> {
    let required = [&form.name, &form.email, &form.password, &form.confirm_password];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err("Please fill in all required fields.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match.");
    }
    Ok(SignupRequest {
        name: form.name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
        role: form.role,
        year: form.year,
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let cfg = expect_context::<crate::config::ApiConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(validate_signup) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let cfg = cfg.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register_user(&cfg, &request).await {
                    Ok(()) => {
                        log::info!("registered {}", request.email);
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        info.set(e.user_message("Something went wrong"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Register"</h1>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Full Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Confirm Password"
                    prop:value=move || form.with(|f| f.confirm_password.clone())
                    on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                />
                <select
                    class="auth-input"
                    prop:value=move || form.with(|f| f.role.as_str())
                    on:change=move |ev| {
                        if let Some(role) = Role::parse(&event_target_value(&ev)) {
                            form.update(|f| f.role = role);
                        }
                    }
                >
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="auth-input"
                    prop:value=move || form.with(|f| f.year.map_or("", Year::as_str))
                    on:change=move |ev| form.update(|f| f.year = Year::parse(&event_target_value(&ev)))
                >
                    <option value="">"Select Year"</option>
                    {Year::ALL
                        .into_iter()
                        .map(|year| view! { <option value=year.as_str()>{year.label()}</option> })
                        .collect_view()}
                </select>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? "
                    <a href="/login">"Log in"</a>
                </p>
            </form>
        </div>
    }
}
