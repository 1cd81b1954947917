//! Create-event form shown in the shell's Events section.
//!
//! The thumbnail goes to the upload service first; submit stays disabled while
//! the upload or the create request is pending.

#[cfg(test)]
#[path = "create_event_test.rs"]
mod create_event_test;

use leptos::prelude::*;

use crate::components::image_uploader::ImageUploader;
use crate::net::types::{Branch, EventCategory, NewEvent};
use crate::util::upload::UploadSlot;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: Option<EventCategory>,
    pub branch: Option<Branch>,
    pub accept_terms: bool,
    pub thumbnail: Option<String>,
}

pub(crate) fn validate_new_event(draft: &EventDraft) -> Result<NewEvent, &'static str> {
    let text = [&draft.title, &draft.description, &draft.date, &draft.time, &draft.location];
    let (Some(category), Some(branch)) = (draft.category, draft.branch) else {
        return Err("Please fill in all required fields.");
    };
    if text.iter().any(|value| value.trim().is_empty()) {
        return Err("Please fill in all required fields.");
    }
    if !draft.accept_terms {
        return Err("Please accept the terms and conditions");
    }
    let Some(thumbnail) = draft.thumbnail.clone() else {
        return Err("Please upload a thumbnail image");
    };
    Ok(NewEvent {
        title: draft.title.trim().to_owned(),
        description: draft.description.trim().to_owned(),
        date: draft.date.clone(),
        time: draft.time.clone(),
        location: draft.location.trim().to_owned(),
        category,
        branch,
        thumbnail,
    })
}

#[component]
pub fn CreateEventForm() -> impl IntoView {
    let draft = RwSignal::new(EventDraft::default());
    let info = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let cfg = expect_context::<crate::config::ApiConfig>();

    let on_thumbnail = Callback::new(move |urls: Vec<String>| {
        if let Some(url) = urls.into_iter().next() {
            draft.update(|d| d.thumbnail = Some(url));
            info.set("Thumbnail uploaded successfully!".to_owned());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() || uploading.get() {
            return;
        }
        let event = match draft.with(validate_new_event) {
            Ok(event) => event,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let cfg = cfg.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_event(&cfg, &event).await {
                    Ok(()) => {
                        log::info!("created event {}", event.title);
                        draft.set(EventDraft::default());
                        info.set("Event created successfully!".to_owned());
                    }
                    Err(e) => {
                        log::warn!("create event failed: {e}");
                        info.set(e.user_message("Failed to create event"));
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = event;
    };

    view! {
        <section class="create-event">
            <h2>"Create Event"</h2>
            <form class="create-event__form" on:submit=on_submit>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
                <div class="create-event__row">
                    <input
                        class="form-input"
                        type="date"
                        placeholder="Date"
                        prop:value=move || draft.with(|d| d.date.clone())
                        on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="time"
                        placeholder="Time"
                        prop:value=move || draft.with(|d| d.time.clone())
                        on:input=move |ev| draft.update(|d| d.time = event_target_value(&ev))
                    />
                </div>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || draft.with(|d| d.location.clone())
                    on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                />
                <textarea
                    class="form-input"
                    placeholder="Description"
                    rows="4"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
                <select
                    class="form-input"
                    prop:value=move || draft.with(|d| d.category.map_or("", EventCategory::as_str))
                    on:change=move |ev| draft.update(|d| d.category = EventCategory::parse(&event_target_value(&ev)))
                >
                    <option value="">"Select Category"</option>
                    {EventCategory::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="form-input"
                    prop:value=move || draft.with(|d| d.branch.map_or("", Branch::as_str))
                    on:change=move |ev| draft.update(|d| d.branch = Branch::parse(&event_target_value(&ev)))
                >
                    <option value="">"Select Branch"</option>
                    {Branch::ALL
                        .into_iter()
                        .map(|b| view! { <option value=b.as_str()>{b.label()}</option> })
                        .collect_view()}
                </select>
                <div class="create-event__thumbnail">
                    <ImageUploader
                        slot=UploadSlot::EventThumbnail
                        on_uploaded=on_thumbnail
                        label="Event Thumbnail*"
                        uploading=uploading
                    />
                    {move || {
                        draft
                            .with(|d| d.thumbnail.clone())
                            .map(|src| view! { <img class="create-event__preview" src=src alt="Thumbnail preview"/> })
                    }}
                </div>
                <label class="create-event__terms">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.accept_terms)
                        on:change=move |ev| draft.update(|d| d.accept_terms = event_target_checked(&ev))
                    />
                    "I accept the "
                    <a href="/terms">"Terms and Conditions"</a>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get() || uploading.get()>
                    {move || if pending.get() { "Creating Event..." } else { "Create Event" }}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
            </form>
        </section>
    }
}
