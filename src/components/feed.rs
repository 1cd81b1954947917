//! Infinite-scroll event feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The feed owns one `FeedLoader` per mount. Page fetches run on the UI task
//! through `drive`; an `IntersectionObserver` on a sentinel at the bottom of the
//! scroll container reports visibility back into the loader.
//!
//! DESIGN
//! ======
//! After each settled page the observer is re-armed rather than trusting the
//! visibility remembered from before the page rendered. The browser then
//! reports the sentinel's position against the new layout, so a short page
//! that leaves the sentinel on screen still pulls the next one.
//!
//! ERROR HANDLING
//! ==============
//! A failed page is terminal for this mount. The loader keeps the items it has
//! and the notice line shows the server's message.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::net::types::EventSummary;
use crate::state::feed::{FeedLoader, FeedNotice};

#[cfg(feature = "hydrate")]
use crate::{
    config::{ApiConfig, FeedConfig},
    net::api::EventFeedSource,
    state::feed::{FetchTicket, drive},
    util::sentinel::SentinelObserver,
};

/// Text for the line under the list, or `None` when nothing should show.
pub(crate) fn notice_text(notice: &FeedNotice) -> Option<String> {
    match notice {
        FeedNotice::InitialLoading => Some("Loading...".to_owned()),
        FeedNotice::LoadingMore => Some("Loading more...".to_owned()),
        FeedNotice::MoreAvailable => None,
        FeedNotice::NoMore => Some("No more events.".to_owned()),
        FeedNotice::Empty => Some("No events yet.".to_owned()),
        FeedNotice::Failed(message) => Some(format!("Error: {message}")),
    }
}

#[component]
pub fn Feed() -> impl IntoView {
    let loader = RwSignal::new(FeedLoader::<EventSummary>::new());
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let sentinel_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let source = EventFeedSource { config: expect_context::<ApiConfig>() };
        let lookahead_px = expect_context::<FeedConfig>().lookahead_px;
        let observer = StoredValue::new_local(None::<SentinelObserver>);

        // First page on mount.
        let first_source = source.clone();
        Effect::new(move || {
            if let Some(ticket) = loader.try_update(FeedLoader::start).flatten() {
                spawn_fetch(first_source.clone(), loader, observer, ticket);
            }
        });

        Effect::new(move || {
            let (Some(root), Some(target)) = (container_ref.get(), sentinel_ref.get()) else {
                return;
            };
            if observer.try_with_value(Option::is_some).unwrap_or(true) {
                return;
            }
            let source = source.clone();
            let on_change = move |visible: bool| {
                if let Some(ticket) = loader.try_update(|l| l.on_visibility(visible)).flatten() {
                    spawn_fetch(source.clone(), loader, observer, ticket);
                }
            };
            match SentinelObserver::observe(&root, &target, lookahead_px, on_change) {
                Ok(obs) => observer.set_value(Some(obs)),
                Err(err) => log::warn!("feed: sentinel observer unavailable: {err:?}"),
            }
        });

        on_cleanup(move || {
            loader.try_update(FeedLoader::dispose);
            observer.try_update_value(|slot| {
                slot.take();
            });
        });
    }

    let items = move || loader.with(|l| l.items().cloned().collect::<Vec<_>>());
    let initial_loading = move || loader.with(|l| l.notice() == FeedNotice::InitialLoading);

    view! {
        <div class="feed" node_ref=container_ref>
            <Show when=move || !initial_loading()>
                <div class="feed__list">
                    <For each=items key=|event| event.id.clone() children=|event| view! { <EventCard event=event/> }/>
                </div>
            </Show>
            {move || {
                loader
                    .with(|l| notice_text(&l.notice()))
                    .map(|text| view! { <p class="feed__notice">{text}</p> })
            }}
            <div class="feed__sentinel" node_ref=sentinel_ref aria-hidden="true"></div>
        </div>
    }
}

/// Run one fetch, settle it, then re-arm the observer for the next decision.
#[cfg(feature = "hydrate")]
fn spawn_fetch(
    source: EventFeedSource,
    loader: RwSignal<FeedLoader<EventSummary>>,
    observer: StoredValue<Option<SentinelObserver>, LocalStorage>,
    ticket: FetchTicket,
) {
    leptos::task::spawn_local(async move {
        drive(&source, ticket, |ticket, result| {
            let applied = loader.try_update(|l| l.settle(ticket, result)).unwrap_or(false);
            if applied {
                observer.try_with_value(|slot| {
                    if let Some(obs) = slot {
                        obs.rearm();
                    }
                });
            }
            None
        })
        .await;
    });
}
