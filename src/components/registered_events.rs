//! List of events the signed-in user has joined.

#[cfg(test)]
#[path = "registered_events_test.rs"]
mod registered_events_test;

use leptos::prelude::*;

use crate::net::types::{RegisteredEvent, display_date};

pub(crate) const EMPTY_TEXT: &str = "You haven't registered for any events yet.";
pub(crate) const FAILED_FALLBACK: &str = "Failed to fetch events";

/// Fetch outcome as the view needs it; errors are already user text.
pub(crate) type Registered = Option<Result<Vec<RegisteredEvent>, String>>;

/// Line shown instead of the list, if any.
pub(crate) fn status_text(state: &Registered) -> Option<String> {
    match state {
        None => Some("Loading...".to_owned()),
        Some(Err(message)) => Some(message.clone()),
        Some(Ok(events)) if events.is_empty() => Some(EMPTY_TEXT.to_owned()),
        Some(Ok(_)) => None,
    }
}

#[component]
pub fn RegisteredEvents(#[prop(into)] user_id: Signal<Option<String>>) -> impl IntoView {
    let state = RwSignal::new(None::<Result<Vec<RegisteredEvent>, String>>);

    #[cfg(feature = "hydrate")]
    {
        let cfg = expect_context::<crate::config::ApiConfig>();
        Effect::new(move || {
            let Some(id) = user_id.get() else {
                return;
            };
            state.set(None);
            let cfg = cfg.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_registered_events(&cfg, &id)
                    .await
                    .map_err(|e| e.user_message(FAILED_FALLBACK));
                if let Err(message) = &outcome {
                    log::warn!("registered events for {id}: {message}");
                }
                state.try_set(Some(outcome));
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = user_id;

    let events = move || state.with(|s| s.as_ref().and_then(|r| r.as_ref().ok()).cloned().unwrap_or_default());

    view! {
        <section class="registered-events">
            <h3 class="registered-events__title">"Registered Events"</h3>
            {move || state.with(status_text).map(|text| view! { <p class="registered-events__status">{text}</p> })}
            <ul class="registered-events__list">
                <For
                    each=events
                    key=|event| event.id.clone()
                    children=|event| {
                        let href = format!("/events/{}", event.id);
                        view! {
                            <li class="registered-events__item">
                                <a href=href>
                                    <strong>{event.title}</strong>
                                </a>
                                <p>{event.description}</p>
                                <p class="registered-events__meta">
                                    {format!("{} · {} · {}", display_date(&event.date), event.time, event.location)}
                                </p>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
