//! Event detail page (`/events/:event_id`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Members join or leave the event; admins delete it or add gallery images.
//! Every successful mutation re-fetches the event so the participant count and
//! gallery come from the server.
//!
//! ERROR HANDLING
//! ==============
//! Load failures render a dedicated screen (404 becomes "Event not found").
//! Mutation failures show an inline message and keep the loaded event.

#[cfg(test)]
#[path = "event_detail_test.rs"]
mod event_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::image_uploader::ImageUploader;
use crate::components::lightbox::Gallery;
use crate::net::api::RegistrationAction;
use crate::net::error::ApiError;
use crate::net::types::{EventDetail, display_date};
use crate::state::session::SessionState;
use crate::util::upload::UploadSlot;

/// What the page body should show for the current fetch state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DetailView {
    Loading,
    NotFound,
    Failed(String),
    Ready(EventDetail),
}

pub(crate) fn detail_view(state: &Option<Result<EventDetail, ApiError>>) -> DetailView {
    match state {
        None => DetailView::Loading,
        Some(Ok(detail)) => DetailView::Ready(detail.clone()),
        Some(Err(err)) if err.status() == Some(404) => DetailView::NotFound,
        Some(Err(err)) => DetailView::Failed(err.user_message("Failed to load event details")),
    }
}

/// The toggle sends `unregister` only when the user is already listed.
pub(crate) fn registration_action(detail: &EventDetail, user_id: Option<&str>) -> RegistrationAction {
    match user_id {
        Some(id) if detail.is_registered(id) => RegistrationAction::Unregister,
        _ => RegistrationAction::Register,
    }
}

pub(crate) fn registration_label(action: RegistrationAction) -> &'static str {
    match action {
        RegistrationAction::Register => "Join Event",
        RegistrationAction::Unregister => "Leave Event",
    }
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let params = use_params_map();
    let event_id = Memo::new(move |_| params.read().get("event_id").unwrap_or_default());
    let session = expect_context::<RwSignal<SessionState>>();
    let state = RwSignal::new(None::<Result<EventDetail, ApiError>>);
    let reload = RwSignal::new(0_u32);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let cfg = StoredValue::new(expect_context::<crate::config::ApiConfig>());
    #[cfg(feature = "hydrate")]
    let navigate = StoredValue::new_local(leptos_router::hooks::use_navigate());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let id = event_id.get();
        reload.track();
        let cfg = cfg.get_value();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_event(&cfg, &id).await;
            if let Err(err) = &result {
                log::warn!("event {id}: {err}");
            }
            state.try_set(Some(result));
        });
    });

    let on_toggle = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        let Some(user_id) = session.with_untracked(|s| s.user_id().map(str::to_owned)) else {
            return;
        };
        let Some(action) = state.with_untracked(|s| match s {
            Some(Ok(detail)) => Some(registration_action(detail, Some(&user_id))),
            _ => None,
        }) else {
            return;
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let cfg = cfg.get_value();
            let id = event_id.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::set_registration(&cfg, &id, &user_id, action).await {
                    Ok(()) => {
                        info.set(action.success_message().to_owned());
                        reload.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log::warn!("{} {id} failed: {err}", action.path_segment());
                        info.set(err.user_message("Registration update failed"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = action;
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Are you sure you want to delete this event?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            busy.set(true);
            let cfg = cfg.get_value();
            let id = event_id.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_event(&cfg, &id).await {
                    Ok(()) => {
                        log::info!("deleted event {id}");
                        navigate.with_value(|nav| nav("/main", leptos_router::NavigateOptions::default()));
                    }
                    Err(err) => {
                        log::warn!("delete {id} failed: {err}");
                        info.set(err.user_message("Failed to delete event"));
                    }
                }
                busy.set(false);
            });
        }
    };

    let on_images = Callback::new(move |urls: Vec<String>| {
        if urls.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let cfg = cfg.get_value();
            let id = event_id.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::attach_event_images(&cfg, &id, urls).await {
                    Ok(()) => {
                        info.set("Images added to the gallery".to_owned());
                        reload.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log::warn!("attach images to {id} failed: {err}");
                        info.set(err.user_message("Failed to add images"));
                    }
                }
            });
        }
    });

    let body = move || match state.with(detail_view) {
        DetailView::Loading => view! { <div class="event-page__spinner" aria-label="Loading"></div> }.into_any(),
        DetailView::NotFound => view! {
            <div class="event-page__state">
                <h2>"Event not found"</h2>
                <a class="btn" href="/main">"Back to Events"</a>
            </div>
        }
        .into_any(),
        DetailView::Failed(message) => view! {
            <div class="event-page__state event-page__state--error">
                <h2>"Error loading event"</h2>
                <p>{message}</p>
                <a class="btn" href="/main">"Back to Events"</a>
            </div>
        }
        .into_any(),
        DetailView::Ready(detail) => {
            let is_admin = session.with(SessionState::is_admin);
            let action = session.with(|s| registration_action(&detail, s.user_id()));
            let images = detail.event_images.clone();
            view! {
                <article class="event-page__card">
                    {detail.thumbnail.clone().map(|src| view! { <img class="event-page__hero" src=src alt=detail.title.clone()/> })}
                    <div class="event-page__content">
                        <h1>{detail.title.clone()}</h1>
                        <p class="event-page__description">{detail.description.clone()}</p>
                        <dl class="event-page__facts">
                            <dt>"Date"</dt>
                            <dd>{display_date(&detail.date)}</dd>
                            <dt>"Time"</dt>
                            <dd>{detail.time.clone()}</dd>
                            <dt>"Location"</dt>
                            <dd>{detail.location.clone()}</dd>
                            <dt>"Participants"</dt>
                            <dd>{format!("{} participants", detail.participant_count())}</dd>
                        </dl>
                        {if is_admin {
                            view! {
                                <button class="btn btn--danger" disabled=move || busy.get() on:click=on_delete>
                                    "Delete Event"
                                </button>
                                <ImageUploader slot=UploadSlot::EventImages on_uploaded=on_images label="Add gallery images"/>
                            }
                            .into_any()
                        } else {
                            view! {
                                <button
                                    class="btn"
                                    class:btn--danger=action == RegistrationAction::Unregister
                                    disabled=move || busy.get()
                                    on:click=on_toggle
                                >
                                    {registration_label(action)}
                                </button>
                            }
                            .into_any()
                        }}
                        {(!images.is_empty())
                            .then(|| view! { <h3 class="event-page__gallery-title">"Event Gallery"</h3> })}
                        <Gallery images=images/>
                    </div>
                </article>
            }
            .into_any()
        }
    };

    view! {
        <div class="event-page">
            {body}
            <Show when=move || !info.get().is_empty()>
                <p class="event-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
