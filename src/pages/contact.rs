//! Contact Page

use leptos::prelude::*;

use crate::components::ContactForm;

#[component]
pub fn ContactPage(garden: Option<String>) -> impl IntoView {
    view! {
        <div class="contact-page">
            <h1>"Kontakt"</h1>
            <p class="page-intro">
                "Fragen zu freien Gärten, zur Warteliste oder zum Vereinsleben? \
                 Schreiben Sie uns."
            </p>

            <div class="contact-layout">
                <ContactForm garden=garden />

                <div class="contact-info">
                    <div class="info-card">
                        <h3>"Anschrift"</h3>
                        <p>"Kleingartenverein Grüne Oase e.V."</p>
                        <p>"Gartenweg 12, 12345 Musterstadt"</p>
                    </div>
                    <div class="info-card">
                        <h3>"Telefon & E-Mail"</h3>
                        <p>"0123 / 456 789 (AB außerhalb der Bürozeiten)"</p>
                        <p>"vorstand@gruene-oase-musterstadt.de"</p>
                    </div>
                    <div class="info-card">
                        <h3>"Bürozeiten"</h3>
                        <p>"Dienstag 16–18 Uhr"</p>
                        <p>"Samstag 10–12 Uhr"</p>
                        <p>"Vereinsheim am Hauptweg"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
