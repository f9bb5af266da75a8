//! Not-Found Page
//!
//! Shown for unknown hash routes and for detail lookups that miss.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Diese Seite gibt es nicht (mehr)."</p>
            <div class="not-found-links">
                <a class="button primary" href="#/">"Zur Startseite"</a>
                <a class="button" href="#/gardens">"Freie Gärten"</a>
                <a class="button" href="#/contact">"Kontakt"</a>
            </div>
        </div>
    }
}
