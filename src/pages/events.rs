//! Events Page
//!
//! Calendar-month listing with prev/next navigation and a category
//! select. One fetch per mount; everything else is pure filtering.

use chrono::Datelike;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::EventCard;
use crate::content::{self, RequestGuard};
use crate::context::use_site;
use crate::filter::{filter_events, month_name, next_month, prev_month, EventFilter};
use crate::models::EventView;

#[component]
pub fn EventsPage() -> impl IntoView {
    let site = use_site();
    let today = site.today;

    let (events, set_events) = signal(Vec::<EventView>::new());
    let (loading, set_loading) = signal(true);
    let (month, set_month) = signal((today.year(), today.month()));
    let (category, set_category) = signal("all".to_string());

    let guard = RequestGuard::new();
    let client = site.client.clone();
    Effect::new(move |_| {
        let client = client.clone();
        let token = guard.issue();
        set_loading.set(true);
        spawn_local(async move {
            let loaded = content::load_events(client.as_ref(), today).await;
            if token.is_current() {
                set_events.set(loaded);
                set_loading.set(false);
            }
        });
    });

    let visible = Memo::new(move |_| {
        let (year, month) = month.get();
        let filter = EventFilter {
            year,
            month,
            category: category.get(),
        };
        filter_events(&events.get(), &filter)
    });

    let month_label = move || {
        let (year, month) = month.get();
        format!("{} {}", month_name(month), year)
    };

    view! {
        <div class="events-page">
            <h1>"Veranstaltungen"</h1>
            <p class="page-intro">
                "Feste, Workshops und Versammlungen des Vereins. Gäste sind bei \
                 allen Festen herzlich willkommen."
            </p>

            <div class="month-nav">
                <button on:click=move |_| set_month.update(|(y, m)| (*y, *m) = prev_month(*y, *m))>
                    "‹ Vormonat"
                </button>
                <h2>{month_label}</h2>
                <button on:click=move |_| set_month.update(|(y, m)| (*y, *m) = next_month(*y, *m))>
                    "Folgemonat ›"
                </button>

                <select
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="all">"Alle Kategorien"</option>
                    <option value="fest">"Feste"</option>
                    <option value="workshop">"Workshops"</option>
                    <option value="versammlung">"Versammlungen"</option>
                </select>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Veranstaltungen werden geladen..."</div>
            </Show>

            <Show when=move || !loading.get()>
                {move || {
                    if visible.get().is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>"In diesem Monat stehen keine Termine an."</p>
                                <button
                                    class="button"
                                    on:click=move |_| set_month.set((today.year(), today.month()))
                                >
                                    "Zum aktuellen Monat"
                                </button>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="event-grid">
                                <For
                                    each=move || visible.get()
                                    key=|event| event.id.clone()
                                    children=move |event| view! { <EventCard event=event /> }
                                />
                            </div>
                        }.into_any()
                    }
                }}
            </Show>
        </div>
    }
}
