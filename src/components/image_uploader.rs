//! File picker bound to one upload slot.
//!
//! Validates the selection against the slot limits, uploads, and hands the
//! stored URLs to `on_uploaded`. Callers that need to block while an upload
//! runs pass an `uploading` signal.

use leptos::prelude::*;

use crate::util::upload::UploadSlot;

#[component]
pub fn ImageUploader(
    slot: UploadSlot,
    on_uploaded: Callback<Vec<String>>,
    #[prop(optional)] label: &'static str,
    #[prop(optional)] uploading: Option<RwSignal<bool>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let busy = uploading.unwrap_or_else(|| RwSignal::new(false));
    let message = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let cfg = use_context::<crate::config::ApiConfig>();
    let limit_hint = format!(
        "Images up to {} MB, {} file{}",
        slot.max_file_bytes() / (1024 * 1024),
        slot.max_file_count(),
        if slot.accepts_multiple() { "s" } else { "" }
    );

    let on_change = move |_ev: leptos::ev::Event| {
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = input_ref.get_untracked() else {
                return;
            };
            let files = crate::util::upload::picked_files(&input);
            let Some(cfg) = cfg.clone() else {
                log::warn!("upload: no ApiConfig in context");
                return;
            };
            busy.set(true);
            message.set(Some("Uploading...".to_owned()));
            leptos::task::spawn_local(async move {
                match crate::util::upload::upload_files(&cfg, slot, &files).await {
                    Ok(urls) => {
                        message.set(Some("Upload complete".to_owned()));
                        on_uploaded.run(urls);
                    }
                    Err(err) => {
                        log::warn!("upload to {} failed: {err}", slot.route());
                        message.set(Some(err.to_string()));
                    }
                }
                input.set_value("");
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (input_ref, on_uploaded, message);
    };

    view! {
        <div class="uploader">
            <label class="uploader__label">
                <span>{if label.is_empty() { "Upload images" } else { label }}</span>
                <input
                    class="uploader__input"
                    type="file"
                    accept="image/*"
                    multiple=slot.accepts_multiple()
                    node_ref=input_ref
                    disabled=move || busy.get()
                    on:change=on_change
                />
            </label>
            <p class="uploader__hint">{limit_hint}</p>
            <Show when=move || message.get().is_some()>
                <p class="uploader__message">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
