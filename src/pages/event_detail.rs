//! Event Detail Page
//!
//! Loads one event by route id (token-guarded), with description/
//! details/location tabs, a participation sidebar and a copy-link
//! share button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::content::{self, RequestGuard};
use crate::context::use_site;
use crate::markdown::parse_markdown;
use crate::models::EventView;

#[component]
pub fn EventDetailPage(id: String) -> impl IntoView {
    let site = use_site();
    let today = site.today;

    let (event, set_event) = signal(None::<EventView>);
    let (loading, set_loading) = signal(true);
    let (tab, set_tab) = signal("beschreibung");
    let (copied, set_copied) = signal(false);

    let guard = RequestGuard::new();
    let client = site.client.clone();
    let requested_id = id.clone();
    Effect::new(move |_| {
        let client = client.clone();
        let id = requested_id.clone();
        let token = guard.issue();
        set_loading.set(true);
        spawn_local(async move {
            let found = content::load_event(client.as_ref(), &id, today).await;
            if token.is_current() {
                set_event.set(found);
                set_loading.set(false);
            }
        });
    });

    let copy_link = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let href = window.location().href().unwrap_or_default();
        let _ = window.navigator().clipboard().write_text(&href);
        set_copied.set(true);
        spawn_local(async move {
            TimeoutFuture::new(2_000).await;
            set_copied.set(false);
        });
    };

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
        <div class="event-detail-page">
            <a class="back-link" href="#/events">"← Zurück zu den Veranstaltungen"</a>

            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Veranstaltung wird geladen..."</div> }.into_any();
                }
                let Some(event) = event.get() else {
                    return view! {
                        <div class="empty-state">
                            <h1>"Veranstaltung nicht gefunden"</h1>
                            <p>"Dieser Termin existiert nicht oder liegt zu weit zurück."</p>
                            <a class="button primary" href="#/events">"Zu den Veranstaltungen"</a>
                        </div>
                    }.into_any();
                };

                let long_text = if event.full_description.is_empty() {
                    event.description.clone()
                } else {
                    event.full_description.clone()
                };
                let description_html = parse_markdown(&long_text);
                let details = vec![
                    ("Veranstalter", event.organizer.clone()),
                    ("Kosten", event.price.clone()),
                    ("Uhrzeit", event.time.clone()),
                ];
                let location = event.location.clone();

                let capacity = event
                    .max_participants
                    .map(|max| (event.current_participants.unwrap_or(0), max));
                let fully_booked = event.fully_booked();

                view! {
                    <div class="detail-layout">
                        <div class="detail-main">
                            <span class=format!("event-category {}", event.category)>
                                {event.category_label()}
                            </span>
                            <h1>{event.title.clone()}</h1>
                            <p class="event-meta">
                                {format!("{} · {} · {}", event.date_label(), event.time, event.location)}
                            </p>

                            <div class="tab-bar">
                                {tab_button("beschreibung", "Beschreibung")}
                                {tab_button("details", "Details")}
                                {tab_button("ort", "Ort")}
                            </div>

                            {move || match tab.get() {
                                "details" => view! {
                                    <dl class="event-details">
                                        {details.iter().map(|(label, value)| {
                                            let value = if value.is_empty() { "–".to_string() } else { value.clone() };
                                            view! {
                                                <dt>{*label}</dt>
                                                <dd>{value}</dd>
                                            }
                                        }).collect_view()}
                                    </dl>
                                }.into_any(),
                                "ort" => view! {
                                    <p class="detail-location">{location.clone()}</p>
                                }.into_any(),
                                _ => view! {
                                    <div class="markdown-body" inner_html=description_html.clone()></div>
                                }.into_any(),
                            }}
                        </div>

                        <aside class="detail-sidebar">
                            <div class="info-card">
                                <h3>"Teilnahme"</h3>
                                {match capacity {
                                    Some((current, max)) => view! {
                                        <p>{format!("{} von {} Plätzen belegt", current, max)}</p>
                                        <div class="capacity-bar">
                                            <div
                                                class="capacity-fill"
                                                style=format!("width: {}%", (current * 100 / max.max(1)).min(100))
                                            ></div>
                                        </div>
                                        <p class="capacity-note">
                                            {if fully_booked { "Ausgebucht" } else { "Anmeldung im Büro oder per Kontaktformular" }}
                                        </p>
                                    }.into_any(),
                                    None => view! {
                                        <p>"Keine Anmeldung erforderlich."</p>
                                    }.into_any(),
                                }}
                                <button class="button" on:click=copy_link>
                                    {move || if copied.get() { "Link kopiert!" } else { "Link teilen" }}
                                </button>
                            </div>
                        </aside>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
