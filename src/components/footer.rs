//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-column">
                    <h4>"Kleingartenverein Grüne Oase e.V."</h4>
                    <p>"Gartenweg 12"</p>
                    <p>"12345 Musterstadt"</p>
                </div>
                <div class="footer-column">
                    <h4>"Seiten"</h4>
                    <a href="#/gardens">"Freie Gärten"</a>
                    <a href="#/events">"Veranstaltungen"</a>
                    <a href="#/contact">"Kontakt"</a>
                </div>
                <div class="footer-column">
                    <h4>"Bürozeiten"</h4>
                    <p>"Di 16–18 Uhr, Sa 10–12 Uhr"</p>
                    <p>"Vereinsheim am Hauptweg"</p>
                </div>
            </div>
            <p class="footer-note">"© 2024 Kleingartenverein Grüne Oase e.V."</p>
        </footer>
    }
}
