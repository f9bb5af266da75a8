//! Gardens Page
//!
//! The availability catalog: one fetch per mount, then pure client-side
//! filtering (search, size bucket, feature tags) and load-more
//! pagination over the normalized list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::GardenCard;
use crate::content::{self, RequestGuard};
use crate::context::use_site;
use crate::filter::{collect_features, filter_gardens, page_slice, GardenFilter, SizeFilter};
use crate::models::GardenView;

const PAGE_SIZE: usize = 9;

#[component]
pub fn GardensPage() -> impl IntoView {
    let site = use_site();

    let (gardens, set_gardens) = signal(Vec::<GardenView>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (size, set_size) = signal(SizeFilter::All);
    let (features, set_features) = signal(Vec::<String>::new());
    let (pages, set_pages) = signal(1usize);

    let guard = RequestGuard::new();
    let client = site.client.clone();
    Effect::new(move |_| {
        let client = client.clone();
        let token = guard.issue();
        set_loading.set(true);
        spawn_local(async move {
            let loaded = content::load_gardens(client.as_ref()).await;
            if token.is_current() {
                set_gardens.set(loaded);
                set_loading.set(false);
            }
        });
    });

    let active_filter = Memo::new(move |_| GardenFilter {
        search: search.get(),
        size: size.get(),
        features: features.get(),
    });
    let filtered = Memo::new(move |_| filter_gardens(&gardens.get(), &active_filter.get()));
    let all_features = Memo::new(move |_| collect_features(&gardens.get()));
    let visible = move || page_slice(&filtered.get(), PAGE_SIZE, pages.get());

    let toggle_feature = move |tag: String| {
        set_features.update(|selected| {
            if let Some(pos) = selected.iter().position(|t| *t == tag) {
                selected.remove(pos);
            } else {
                selected.push(tag);
            }
        });
        set_pages.set(1);
    };

    let reset_filters = move || {
        set_search.set(String::new());
        set_size.set(SizeFilter::All);
        set_features.set(Vec::new());
        set_pages.set(1);
    };

    view! {
        <div class="gardens-page">
            <h1>"Freie Gärten"</h1>
            <p class="page-intro">
                "Alle derzeit verfügbaren Parzellen unserer Anlage. Nutzen Sie die \
                 Filter, um die passende Größe und Ausstattung zu finden."
            </p>

            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="Suche nach Nummer, Ausstattung, Beschreibung..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_pages.set(1);
                    }
                />

                <select
                    prop:value=move || size.get().key()
                    on:change=move |ev| {
                        set_size.set(SizeFilter::from_key(&event_target_value(&ev)));
                        set_pages.set(1);
                    }
                >
                    <option value="all">"Alle Größen"</option>
                    <option value="small">"Klein (unter 250 m²)"</option>
                    <option value="medium">"Mittel (250 bis 300 m²)"</option>
                    <option value="large">"Groß (ab 300 m²)"</option>
                </select>

                <div class="feature-toggles">
                    <For
                        each=move || all_features.get()
                        key=|tag| tag.clone()
                        children=move |tag| {
                            let tag_for_class = tag.clone();
                            let tag_for_click = tag.clone();
                            let is_selected =
                                move || features.get().contains(&tag_for_class);
                            view! {
                                <button
                                    type="button"
                                    class=move || if is_selected() { "feature-toggle active" } else { "feature-toggle" }
                                    on:click=move |_| toggle_feature(tag_for_click.clone())
                                >
                                    {tag}
                                </button>
                            }
                        }
                    />
                </div>

                <Show when={move || active_filter.get().active_count() > 0}>
                    <button class="reset-button" on:click=move |_| reset_filters()>
                        {move || format!("Filter zurücksetzen ({})", active_filter.get().active_count())}
                    </button>
                </Show>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Gärten werden geladen..."</div>
            </Show>

            <Show when=move || !loading.get()>
                <p class="result-count">
                    {move || format!("{} von {} freien Gärten", visible().len(), filtered.get().len())}
                </p>

                {move || {
                    if filtered.get().is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>"Keine Gärten passen zu den gewählten Filtern."</p>
                                <button class="button" on:click=move |_| reset_filters()>
                                    "Filter zurücksetzen"
                                </button>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="garden-grid">
                                <For
                                    each=visible
                                    key=|garden| garden.id.clone()
                                    children=move |garden| view! { <GardenCard garden=garden /> }
                                />
                            </div>
                        }.into_any()
                    }
                }}

                <Show when=move || visible().len() < filtered.get().len()>
                    <button
                        class="button load-more"
                        on:click=move |_| set_pages.update(|p| *p += 1)
                    >
                        "Mehr anzeigen"
                    </button>
                </Show>
            </Show>

            <section class="cta-box">
                <h2>"Nichts Passendes dabei?"</h2>
                <p>"Wir führen eine Warteliste und melden uns, sobald eine Parzelle frei wird."</p>
                <a class="button primary" href="#/contact">"Auf die Warteliste"</a>
            </section>
        </div>
    }
}
