//! Fallback Catalog
//!
//! Canonical hard-coded datasets shown whenever the content store is
//! unconfigured, errors, or returns nothing. Every entry is fully
//! populated so the normalizer defaults never show through. All
//! retrieval paths share these catalogs; no page defines its own.

use chrono::{Datelike, NaiveDate};

use crate::models::{EventView, GardenView};

fn garden(
    id: &str,
    number: &str,
    size_sqm: u32,
    features: &[&str],
    description: &str,
    full_description: &str,
    location: &str,
    price: &str,
    available_from: &str,
    images: &[&str],
) -> GardenView {
    GardenView {
        id: id.to_string(),
        number: number.to_string(),
        size_sqm,
        features: features.iter().map(|f| f.to_string()).collect(),
        available: true,
        image: images[0].to_string(),
        description: description.to_string(),
        full_description: full_description.to_string(),
        images: images.iter().map(|i| i.to_string()).collect(),
        location: location.to_string(),
        price: price.to_string(),
        available_from: available_from.to_string(),
    }
}

/// The five-entry garden catalog, in fixed order. Every field is
/// per-garden; nothing falls back to the normalizer defaults.
pub fn garden_catalog() -> Vec<GardenView> {
    vec![
        garden(
            "1",
            "A-15",
            250,
            &[
                "Laube",
                "Wasseranschluss",
                "Obstbäume",
                "Südausrichtung",
                "Teilweise Schatten",
            ],
            "Schöner Garten mit altem Baumbestand und einer gut erhaltenen Laube.",
            "Dieser wunderschöne Garten mit einer Größe von 250 m² bietet einen \
             alten, gepflegten Baumbestand und eine gut erhaltene Laube. Der \
             Garten verfügt über einen eigenen Wasseranschluss und ist teilweise \
             mit Obstbäumen bepflanzt. Die Südausrichtung sorgt für viel \
             Sonnenlicht, während einige Bereiche durch die Bäume angenehm \
             beschattet sind. Die Parzelle ist ideal für Familien oder \
             Hobbygärtner, die einen bereits etablierten Garten übernehmen \
             möchten. Die Laube bietet Stauraum für Gartengeräte und einen \
             gemütlichen Rückzugsort bei schlechtem Wetter.",
            "Nordöstlicher Bereich der Anlage, nahe am Hauptweg",
            "1.200 € Ablöse + 180 € Jahrespacht",
            "Sofort",
            &[
                "/images/garden-fruit-trees.jpg",
                "/images/garden-berries.jpg",
                "/images/garden-vegetable.jpg",
                "/images/garden-shed.jpg",
            ],
        ),
        garden(
            "2",
            "B-07",
            300,
            &[
                "Gartenhaus",
                "Stromanschluss",
                "Gewächshaus",
                "Westausrichtung",
                "Wassertank",
            ],
            "Großzügiger Garten mit solidem Gartenhaus (20m²), Stromanschluss \
             und einem kleinen Gewächshaus.",
            "Dieser großzügige Garten mit einer Fläche von 300 m² bietet ein \
             solides Gartenhaus mit 20 m² Grundfläche, das über einen \
             Stromanschluss verfügt. Ein kleines, gut erhaltenes Gewächshaus \
             ermöglicht die Anzucht von Pflanzen und die Verlängerung der \
             Gartensaison. Die Westausrichtung sorgt für angenehme \
             Nachmittagssonne. Ein 1000-Liter-Wassertank zur \
             Regenwassersammlung ist bereits installiert. Der Garten ist ideal \
             für ambitionierte Hobbygärtner, die Wert auf Selbstversorgung \
             legen. Das Gartenhaus bietet ausreichend Platz für Werkzeuge und \
             zum Verweilen.",
            "Westlicher Bereich der Anlage, in der Nähe des Gemeinschaftsplatzes",
            "2.500 € Ablöse + 220 € Jahrespacht",
            "Ab 01.06.2024",
            &[
                "/images/garden-house.jpg",
                "/images/garden-pond.jpg",
                "/images/garden-fruit-trees.jpg",
                "/images/garden-vegetable.jpg",
            ],
        ),
        garden(
            "3",
            "C-22",
            280,
            &[
                "Laube",
                "Wasseranschluss",
                "Beerensträucher",
                "Ostausrichtung",
                "Ebenes Gelände",
            ],
            "Gepflegter Garten mit vielen Beerensträuchern und einer einfachen Laube.",
            "Dieser gepflegte Garten mit einer Größe von 280 m² verfügt über \
             zahlreiche Beerensträucher (Himbeeren, Johannisbeeren, \
             Stachelbeeren) und eine einfache, aber funktionale Laube. Der \
             Garten hat einen eigenen Wasseranschluss und bietet durch seine \
             Ostausrichtung angenehme Morgensonne. Das ebene Gelände \
             erleichtert die Bewirtschaftung. Der Garten bietet viel Potenzial \
             für eigene Gestaltungsideen und ist besonders für Einsteiger oder \
             Familien mit Kindern geeignet, die Wert auf Obstanbau legen.",
            "Östlicher Bereich der Anlage, in ruhiger Lage",
            "1.800 € Ablöse + 200 € Jahrespacht",
            "Sofort",
            &[
                "/images/garden-berries.jpg",
                "/images/garden-fruit-trees.jpg",
                "/images/garden-vegetable.jpg",
                "/images/garden-shed.jpg",
            ],
        ),
        garden(
            "4",
            "D-05",
            320,
            &[
                "Gartenhaus",
                "Stromanschluss",
                "Wasseranschluss",
                "Teich",
                "Südwestausrichtung",
            ],
            "Besonders schöner Garten mit einem kleinen Teich, Gartenhaus mit \
             Strom- und Wasseranschluss.",
            "Dieser besonders schöne Garten mit einer Größe von 320 m² ist ein \
             wahres Kleinod. Er verfügt über ein gepflegtes Gartenhaus mit \
             Strom- und Wasseranschluss sowie einen kleinen, naturnahen Teich, \
             der verschiedenen Tieren Lebensraum bietet. Die \
             Südwestausrichtung garantiert viel Sonne über den Tag verteilt. \
             Der Garten ist teilweise mit Zierpflanzen gestaltet und bietet \
             dennoch ausreichend Platz für den Anbau von Gemüse und Obst. \
             Besonders geeignet für Naturliebhaber und Gartengestalter mit \
             Erfahrung.",
            "Südlicher Bereich der Anlage, in bevorzugter Lage",
            "3.200 € Ablöse + 240 € Jahrespacht",
            "Ab 15.07.2024",
            &[
                "/images/garden-pond.jpg",
                "/images/garden-house.jpg",
                "/images/garden-berries.jpg",
                "/images/garden-vegetable.jpg",
            ],
        ),
        garden(
            "5",
            "E-11",
            200,
            &[
                "Laube",
                "Wasseranschluss",
                "Nordausrichtung",
                "Ebenes Gelände",
            ],
            "Kleiner, überschaubarer Garten mit einfacher Laube und Wasseranschluss.",
            "Dieser kleine, überschaubare Garten mit einer Größe von 200 m² ist \
             ideal für Einsteiger oder Personen mit wenig Zeit. Er verfügt \
             über eine einfache Laube und einen Wasseranschluss. Die \
             Nordausrichtung sorgt für angenehme Temperaturen im Sommer. Das \
             ebene Gelände erleichtert die Bewirtschaftung. Der Garten bietet \
             eine gute Grundlage für eigene Gestaltungsideen und ist aufgrund \
             seiner Größe mit überschaubarem Aufwand zu pflegen.",
            "Nördlicher Bereich der Anlage, nahe am Parkplatz",
            "900 € Ablöse + 150 € Jahrespacht",
            "Sofort",
            &[
                "/images/garden-vegetable.jpg",
                "/images/garden-fruit-trees.jpg",
                "/images/garden-berries.jpg",
                "/images/garden-shed.jpg",
            ],
        ),
    ]
}

/// Look up one catalog garden. Unknown ids are `None`, never a panic.
pub fn garden_by_id(id: &str) -> Option<GardenView> {
    garden_catalog().into_iter().find(|g| g.id == id)
}

/// Steps `months` forward from `(year, month)`, clamping nothing since
/// all catalog days exist in every month.
fn shift_month(year: i32, month: u32, months: u32) -> (i32, u32) {
    let total = (month - 1 + months) as i32;
    (year + total / 12, (total % 12) as u32 + 1)
}

fn catalog_date(today: NaiveDate, month_offset: u32, day: u32) -> NaiveDate {
    let (year, month) = shift_month(today.year(), today.month(), month_offset);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(today)
}

/// The six-entry event catalog, anchored to `today` so the listing is
/// never empty: three events in the current month, then one in each of
/// the three following months.
pub fn event_catalog(today: NaiveDate) -> Vec<EventView> {
    vec![
        EventView {
            id: "1".to_string(),
            title: "Sommerfest".to_string(),
            date: catalog_date(today, 0, 15),
            time: "14:00 - 22:00".to_string(),
            location: "Festwiese am Vereinsheim".to_string(),
            description: "Unser großes Sommerfest mit Musik, Grill und Tombola."
                .to_string(),
            full_description: "Das Sommerfest ist der Höhepunkt unseres \
                Vereinsjahres. Ab 14 Uhr spielt die Kapelle, der Grill läuft \
                den ganzen Nachmittag und die Tombola lockt mit Preisen aus \
                den Gärten unserer Mitglieder.\n\n\
                Gäste sind herzlich willkommen, der Eintritt ist frei."
                .to_string(),
            category: "fest".to_string(),
            organizer: "Festausschuss".to_string(),
            price: "Eintritt frei".to_string(),
            max_participants: Some(200),
            current_participants: Some(87),
        },
        EventView {
            id: "2".to_string(),
            title: "Workshop: Kompostieren".to_string(),
            date: catalog_date(today, 0, 20),
            time: "10:00 - 12:30".to_string(),
            location: "Lehrgarten, Parzelle 1".to_string(),
            description: "Grundlagen der Kompostwirtschaft für Einsteiger.".to_string(),
            full_description: "Unser Fachberater zeigt Schritt für Schritt, wie \
                aus Garten- und Küchenabfällen guter Kompost wird: Aufbau der \
                Miete, richtiges Mischungsverhältnis, häufige Fehler.\n\n\
                Bitte Arbeitshandschuhe mitbringen. Die Teilnehmerzahl ist \
                begrenzt."
                .to_string(),
            category: "workshop".to_string(),
            organizer: "Fachberatung".to_string(),
            price: "5 € (Mitglieder frei)".to_string(),
            max_participants: Some(15),
            current_participants: Some(11),
        },
        EventView {
            id: "3".to_string(),
            title: "Erntedankfest".to_string(),
            date: catalog_date(today, 0, 25),
            time: "15:00 - 19:00".to_string(),
            location: "Vereinsheim".to_string(),
            description: "Gemeinsames Fest mit Erntekrone, Kuchenbuffet und Prämierung."
                .to_string(),
            full_description: "Zum Erntedank prämieren wir die schönsten \
                Parzellen des Jahres und lassen die Saison bei Kaffee und \
                selbstgebackenem Kuchen ausklingen. Jeder Garten darf einen \
                Beitrag zum Erntetisch mitbringen.\n\n\
                Die Prämierung beginnt um 16 Uhr."
                .to_string(),
            category: "fest".to_string(),
            organizer: "Vorstand".to_string(),
            price: "Eintritt frei".to_string(),
            max_participants: None,
            current_participants: None,
        },
        EventView {
            id: "4".to_string(),
            title: "Mitgliederversammlung".to_string(),
            date: catalog_date(today, 1, 5),
            time: "19:00 - 21:00".to_string(),
            location: "Vereinsheim, großer Saal".to_string(),
            description: "Ordentliche Versammlung mit Haushaltsbericht und Wahlen."
                .to_string(),
            full_description: String::new(),
            category: "versammlung".to_string(),
            organizer: "Vorstand".to_string(),
            price: String::new(),
            max_participants: None,
            current_participants: None,
        },
        EventView {
            id: "5".to_string(),
            title: "Laternenfest".to_string(),
            date: catalog_date(today, 2, 12),
            time: "17:00 - 20:00".to_string(),
            location: "Hauptweg und Festwiese".to_string(),
            description: "Laternenumzug durch die Anlage für Kinder und Familien."
                .to_string(),
            full_description: String::new(),
            category: "fest".to_string(),
            organizer: "Festausschuss".to_string(),
            price: "Eintritt frei".to_string(),
            max_participants: None,
            current_participants: None,
        },
        EventView {
            id: "6".to_string(),
            title: "Workshop: Obstbaumschnitt".to_string(),
            date: catalog_date(today, 3, 8),
            time: "09:00 - 13:00".to_string(),
            location: "Streuobstwiese am Anlagenrand".to_string(),
            description: "Winterschnitt an Apfel und Birne, mit Praxisteil.".to_string(),
            full_description: String::new(),
            category: "workshop".to_string(),
            organizer: "Fachberatung".to_string(),
            price: "5 € (Mitglieder frei)".to_string(),
            max_participants: Some(12),
            current_participants: Some(4),
        },
    ]
}

/// Look up one catalog event. Unknown ids are `None`, never a panic.
pub fn event_by_id(id: &str, today: NaiveDate) -> Option<EventView> {
    event_catalog(today).into_iter().find(|e| e.id == id)
}
