//! About Page (static content)

use leptos::prelude::*;

const BOARD: &[(&str, &str)] = &[
    ("Erika Brandt", "1. Vorsitzende"),
    ("Jürgen Kowalski", "2. Vorsitzender"),
    ("Sabine Yildiz", "Kassenwartin"),
    ("Thomas Petersen", "Fachberater"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"Über den Verein"</h1>

            <section class="about-section">
                <h2>"Unsere Geschichte"</h2>
                <p>
                    "Der Kleingartenverein Grüne Oase e.V. wurde 1952 von vierzehn \
                     Familien gegründet, die aus Trümmergrundstücken am Stadtrand \
                     Gartenland machten. Heute bewirtschaften rund 120 Mitglieder \
                     die Anlage zwischen Gartenweg und Mühlenbach."
                </p>
            </section>

            <section class="about-section">
                <h2>"Unsere Werte"</h2>
                <ul>
                    <li>"Naturnahes Gärtnern ohne chemisch-synthetische Pflanzenschutzmittel"</li>
                    <li>"Nachbarschaftshilfe und gemeinsame Gemeinschaftsarbeit"</li>
                    <li>"Offene Anlage: Wege und Spielwiese stehen allen Besuchern offen"</li>
                </ul>
            </section>

            <section class="about-section">
                <h2>"Der Vorstand"</h2>
                <div class="board-grid">
                    {BOARD.iter().map(|(name, role)| view! {
                        <div class="board-card">
                            <h3>{*name}</h3>
                            <p>{*role}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="about-section">
                <h2>"Mitglied werden"</h2>
                <p>
                    "Die Pacht beträgt je nach Parzellengröße zwischen 25 und 45 Euro \
                     im Monat, hinzu kommen der Vereinsbeitrag und Nebenkosten. \
                     Neupächter erhalten im ersten Jahr eine Patenschaft durch \
                     erfahrene Gartenfreunde."
                </p>
                <a class="button primary" href="#/gardens">"Zu den freien Gärten"</a>
            </section>
        </div>
    }
}
