//! Scrapbook section: upload photos and browse this session's uploads.

use leptos::prelude::*;

use crate::components::image_uploader::ImageUploader;
use crate::components::lightbox::Gallery;
use crate::util::upload::UploadSlot;

#[component]
pub fn Scrapbook() -> impl IntoView {
    let images = RwSignal::new(Vec::<String>::new());
    let on_uploaded = Callback::new(move |urls: Vec<String>| images.update(|list| list.extend(urls)));

    view! {
        <section class="scrapbook">
            <h2 class="scrapbook__title">"Scrapbook"</h2>
            <ImageUploader slot=UploadSlot::Scrapbook on_uploaded=on_uploaded label="Add photos"/>
            <Gallery images=images empty_text="No photos yet. Upload some memories!"/>
        </section>
    }
}
