//! Feed card for one event summary; links to the event detail page.

use leptos::prelude::*;

use crate::net::types::EventSummary;

#[component]
pub fn EventCard(event: EventSummary) -> impl IntoView {
    let href = format!("/events/{}", event.id);
    let thumbnail = event.thumbnail.clone();

    view! {
        <a class="event-card" href=href>
            {thumbnail
                .map(|src| {
                    view! { <img class="event-card__thumb" src=src alt="" loading="lazy"/> }
                })}
            <div class="event-card__body">
                <h3 class="event-card__title">{event.title}</h3>
                <p class="event-card__description">{event.description}</p>
            </div>
        </a>
    }
}
