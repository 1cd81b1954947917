//! Thumbnail grid with a click-to-enlarge lightbox.

use leptos::prelude::*;

use crate::state::gallery::Lightbox;

#[component]
pub fn Gallery(#[prop(into)] images: Signal<Vec<String>>, #[prop(optional)] empty_text: &'static str) -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new(images.get_untracked()));

    Effect::new(move || {
        let latest = images.get();
        lightbox.update(|lb| lb.set_images(latest));
    });

    let overlay_ref = NodeRef::<leptos::html::Div>::new();

    // Keyboard navigation needs the overlay focused as soon as it mounts.
    Effect::new(move || {
        let Some(overlay) = overlay_ref.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            if let Err(err) = overlay.focus() {
                log::debug!("lightbox: focus failed: {err:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = overlay;
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        if lightbox.try_update(|lb| lb.handle_key(&key)).unwrap_or(false) {
            ev.prevent_default();
        }
    };

    view! {
        <div class="gallery">
            <Show
                when=move || !images.with(Vec::is_empty)
                fallback=move || {
                    (!empty_text.is_empty()).then(|| view! { <p class="gallery__empty">{empty_text}</p> })
                }
            >
                <div class="gallery__grid">
                    {move || {
                        images
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, src)| {
                                view! {
                                    <button class="gallery__thumb" on:click=move |_| lightbox.update(|lb| lb.open(index))>
                                        <img src=src alt="" loading="lazy"/>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
            <Show when=move || lightbox.with(Lightbox::is_open)>
                <div class="lightbox" tabindex="-1" node_ref=overlay_ref on:keydown=on_keydown on:click=move |_| lightbox.update(Lightbox::close)>
                    <button
                        class="lightbox__nav lightbox__nav--prev"
                        aria-label="Previous image"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            lightbox.update(Lightbox::prev);
                        }
                    >
                        "‹"
                    </button>
                    <img
                        class="lightbox__image"
                        src=move || lightbox.with(|lb| lb.current().map(str::to_owned).unwrap_or_default())
                        alt=""
                        on:click=move |ev| ev.stop_propagation()
                    />
                    <button
                        class="lightbox__nav lightbox__nav--next"
                        aria-label="Next image"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            lightbox.update(Lightbox::next);
                        }
                    >
                        "›"
                    </button>
                    <span class="lightbox__position">
                        {move || lightbox.with(|lb| lb.position_label().unwrap_or_default())}
                    </span>
                    <button class="lightbox__close" aria-label="Close">"✕"</button>
                </div>
            </Show>
        </div>
    }
}
