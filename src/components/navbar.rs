//! Navigation Bar Component

use leptos::prelude::*;

use crate::route::Route;

const NAV_LINKS: &[(&str, &str, &str)] = &[
    ("home", "#/", "Start"),
    ("about", "#/about", "Über uns"),
    ("gardens", "#/gardens", "Freie Gärten"),
    ("events", "#/events", "Veranstaltungen"),
    ("contact", "#/contact", "Kontakt"),
];

#[component]
pub fn NavBar(route: ReadSignal<Route>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="navbar">
            <a class="navbar-brand" href="#/">
                <span class="navbar-logo">"🌱"</span>
                "Kleingartenverein Grüne Oase"
            </a>

            <button
                class="navbar-toggle"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <nav class=move || if menu_open.get() { "navbar-links open" } else { "navbar-links" }>
                {NAV_LINKS.iter().map(|(key, href, label)| {
                    let is_active = move || route.get().nav_key() == *key;
                    view! {
                        <a
                            href=*href
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |_| set_menu_open.set(false)
                        >
                            {*label}
                        </a>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
