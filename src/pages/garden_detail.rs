//! Garden Detail Page
//!
//! Loads one garden by route id (token-guarded against superseded
//! fetches), plus the catalog for the related-gardens strip. Unknown
//! ids render the not-found state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{GardenCard, ImageGallery};
use crate::content::{self, RequestGuard};
use crate::context::use_site;
use crate::markdown::parse_markdown;
use crate::models::GardenView;
use crate::route::contact_href;

#[component]
pub fn GardenDetailPage(id: String) -> impl IntoView {
    let site = use_site();

    let (garden, set_garden) = signal(None::<GardenView>);
    let (related, set_related) = signal(Vec::<GardenView>::new());
    let (loading, set_loading) = signal(true);
    let (tab, set_tab) = signal("beschreibung");

    let guard = RequestGuard::new();
    let client = site.client.clone();
    let requested_id = id.clone();
    Effect::new(move |_| {
        let client = client.clone();
        let id = requested_id.clone();
        let token = guard.issue();
        set_loading.set(true);
        spawn_local(async move {
            let found = content::load_garden(client.as_ref(), &id).await;
            let catalog = content::load_gardens(client.as_ref()).await;
            if token.is_current() {
                set_related.set(
                    catalog
                        .into_iter()
                        .filter(|g| g.id != id)
                        .take(3)
                        .collect(),
                );
                set_garden.set(found);
                set_loading.set(false);
            }
        });
    });

    let tab_button = move |key: &'static str, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == key { "tab active" } else { "tab" }
                on:click=move |_| set_tab.set(key)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="garden-detail-page">
            <a class="back-link" href="#/gardens">"← Zurück zur Übersicht"</a>

            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Garten wird geladen..."</div> }.into_any();
                }
                let Some(garden) = garden.get() else {
                    return view! {
                        <div class="empty-state">
                            <h1>"Garten nicht gefunden"</h1>
                            <p>"Diese Parzelle ist nicht (mehr) im Angebot."</p>
                            <a class="button primary" href="#/gardens">"Zu den freien Gärten"</a>
                        </div>
                    }.into_any();
                };

                let description_html = parse_markdown(&garden.full_description);
                let features = garden.features.clone();
                let location = garden.location.clone();
                let contact = contact_href(&garden.number);

                view! {
                    <div class="detail-layout">
                        <div class="detail-main">
                            <div class="detail-header">
                                <h1>{format!("Garten {}", garden.number)}</h1>
                                <span class="garden-card-size">{garden.size_label()}</span>
                            </div>

                            <ImageGallery
                                images=garden.images.clone()
                                alt=format!("Garten {}", garden.number)
                            />

                            <div class="tab-bar">
                                {tab_button("beschreibung", "Beschreibung")}
                                {tab_button("ausstattung", "Ausstattung")}
                                {tab_button("lage", "Lage")}
                            </div>

                            {move || match tab.get() {
                                "ausstattung" => view! {
                                    <ul class="feature-list">
                                        {features.iter().map(|feature| view! {
                                            <li>{feature.clone()}</li>
                                        }).collect_view()}
                                    </ul>
                                }.into_any(),
                                "lage" => view! {
                                    <p class="detail-location">{location.clone()}</p>
                                }.into_any(),
                                _ => view! {
                                    <div class="markdown-body" inner_html=description_html.clone()></div>
                                }.into_any(),
                            }}
                        </div>

                        <aside class="detail-sidebar">
                            <div class="info-card">
                                <h3>"Auf einen Blick"</h3>
                                <dl>
                                    <dt>"Größe"</dt>
                                    <dd>{garden.size_label()}</dd>
                                    <dt>"Verfügbar ab"</dt>
                                    <dd>{garden.available_from.clone()}</dd>
                                    <dt>"Pacht"</dt>
                                    <dd>{garden.price.clone()}</dd>
                                </dl>
                                <a class="button primary" href=contact>
                                    "Anfrage stellen"
                                </a>
                            </div>
                        </aside>
                    </div>
                }.into_any()
            }}

            <section class="home-section">
                <h2>"Weitere freie Gärten"</h2>
                <div class="garden-grid">
                    <For
                        each=move || related.get()
                        key=|garden| garden.id.clone()
                        children=move |garden| view! { <GardenCard garden=garden /> }
                    />
                </div>
            </section>
        </div>
    }
}
