//! Home Page
//!
//! Hero, about teaser, feature cards, upcoming events and a garden
//! preview. Loads both catalogs once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EventCard, GardenCard};
use crate::content::{self, RequestGuard};
use crate::context::use_site;
use crate::filter::upcoming_events;
use crate::models::{EventView, GardenView};

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_site();
    let today = site.today;

    let (gardens, set_gardens) = signal(Vec::<GardenView>::new());
    let (events, set_events) = signal(Vec::<EventView>::new());

    let guard = RequestGuard::new();
    let client = site.client.clone();
    Effect::new(move |_| {
        let client = client.clone();
        let token = guard.issue();
        spawn_local(async move {
            let gardens = content::load_gardens(client.as_ref()).await;
            let events = content::load_events(client.as_ref(), today).await;
            if token.is_current() {
                set_gardens.set(gardens);
                set_events.set(events);
            }
        });
    });

    let preview = move || gardens.get().into_iter().take(3).collect::<Vec<_>>();
    let next_events = move || upcoming_events(&events.get(), today, 3);

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Willkommen beim Kleingartenverein Grüne Oase"</h1>
                <p>"Seit 1952 gärtnern, erholen und feiern wir gemeinsam am Stadtrand von Musterstadt."</p>
                <div class="hero-actions">
                    <a class="button primary" href="#/gardens">"Freie Gärten ansehen"</a>
                    <a class="button" href="#/about">"Mehr über uns"</a>
                </div>
            </section>

            <section class="feature-cards">
                <div class="feature-card">
                    <span class="feature-icon">"🌿"</span>
                    <h3>"Gärtnern mit Gemeinschaft"</h3>
                    <p>"120 Parzellen, Fachberatung und Gerätetausch unter Nachbarn."</p>
                </div>
                <div class="feature-card">
                    <span class="feature-icon">"🎪"</span>
                    <h3>"Feste und Workshops"</h3>
                    <p>"Vom Sommerfest bis zum Obstbaumschnitt, das ganze Jahr über."</p>
                </div>
                <div class="feature-card">
                    <span class="feature-icon">"👨‍👩‍👧"</span>
                    <h3>"Familienfreundlich"</h3>
                    <p>"Spielwiese, Patenschaften für Einsteiger und faire Pachten."</p>
                </div>
            </section>

            <section class="home-section">
                <div class="section-header">
                    <h2>"Nächste Veranstaltungen"</h2>
                    <a href="#/events">"Alle Veranstaltungen"</a>
                </div>
                <div class="event-grid">
                    <For
                        each=next_events
                        key=|event| event.id.clone()
                        children=move |event| view! { <EventCard event=event /> }
                    />
                </div>
            </section>

            <section class="home-section">
                <div class="section-header">
                    <h2>"Aktuell freie Gärten"</h2>
                    <a href="#/gardens">"Alle freien Gärten"</a>
                </div>
                <div class="garden-grid">
                    <For
                        each=preview
                        key=|garden| garden.id.clone()
                        children=move |garden| view! { <GardenCard garden=garden /> }
                    />
                </div>
            </section>

            <section class="cta-box">
                <h2>"Lust auf einen eigenen Garten?"</h2>
                <p>"Schreiben Sie uns, wir führen Sie gern durch die Anlage."</p>
                <a class="button primary" href="#/contact">"Kontakt aufnehmen"</a>
            </section>
        </div>
    }
}
