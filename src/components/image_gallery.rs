//! Image Gallery Component
//!
//! Main image with prev/next controls and thumbnail strip, used by the
//! garden detail page. `images` is never empty (normalizer guarantee).

use leptos::prelude::*;

#[component]
pub fn ImageGallery(images: Vec<String>, alt: String) -> impl IntoView {
    let count = images.len();
    let (current, set_current) = signal(0usize);

    let images_for_main = images.clone();
    let main_src = move || images_for_main[current.get().min(count - 1)].clone();

    let show_prev = move |_| set_current.update(|i| *i = if *i == 0 { count - 1 } else { *i - 1 });
    let show_next = move |_| set_current.update(|i| *i = (*i + 1) % count);

    view! {
        <div class="image-gallery">
            <div class="gallery-main">
                <img src=main_src alt=alt.clone() />
                <Show when={move || count > 1}>
                    <button class="gallery-nav prev" on:click=show_prev>"‹"</button>
                    <button class="gallery-nav next" on:click=show_next>"›"</button>
                </Show>
            </div>

            <Show when={move || count > 1}>
                <div class="gallery-thumbs">
                    {images.iter().cloned().enumerate().map(|(i, src)| {
                        let is_current = move || current.get() == i;
                        view! {
                            <button
                                class=move || if is_current() { "gallery-thumb active" } else { "gallery-thumb" }
                                on:click=move |_| set_current.set(i)
                            >
                                <img src=src.clone() alt=format!("Bild {}", i + 1) />
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
