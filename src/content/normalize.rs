//! Record Normalization
//!
//! Pure functions mapping raw CDA records into view models. Every
//! optional field has a fixed default, so a record missing all of them
//! still normalizes; nothing here performs I/O.

use chrono::NaiveDate;

use super::records::{EventRecord, GardenRecord};
use crate::models::{EventView, GardenView};

/// Served for records without any usable image
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
/// Display number for gardens without a title
pub const UNNAMED_GARDEN: &str = "Unnamed Garden";
/// Display title for events without one
pub const UNNAMED_EVENT: &str = "Unbenannte Veranstaltung";
/// Location default; remote garden records carry no location field
pub const DEFAULT_LOCATION: &str = "Kleingartenanlage Grüne Oase";
/// Price default; remote garden records carry no price field
pub const DEFAULT_PRICE: &str = "Auf Anfrage";

/// Prepend the secure scheme to a stored scheme-relative asset URL.
/// The CDA always stores `//...` URLs, so no other input shape is handled.
pub fn resolve_asset_url(url: &str) -> String {
    format!("https:{}", url)
}

/// Normalize one garden record. Total: partial data maps to the
/// documented defaults instead of dropping the record.
pub fn garden_view(record: GardenRecord) -> GardenView {
    let mut images: Vec<String> = record
        .assets
        .iter()
        .filter_map(|asset| asset.fields.file.as_ref())
        .map(|file| resolve_asset_url(&file.url))
        .collect();
    if images.is_empty() {
        images.push(PLACEHOLDER_IMAGE.to_string());
    }

    let available = record.fields.availability.unwrap_or(false);
    let description = record.fields.description.unwrap_or_default();

    GardenView {
        id: record.id,
        number: record
            .fields
            .titel
            .unwrap_or_else(|| UNNAMED_GARDEN.to_string()),
        size_sqm: record.fields.size.unwrap_or(0),
        features: record.fields.ausstattungsmerkmale.unwrap_or_default(),
        available,
        image: images[0].clone(),
        // The CMS has a single description field; the detail page reuses it.
        full_description: description.clone(),
        description,
        images,
        location: DEFAULT_LOCATION.to_string(),
        price: DEFAULT_PRICE.to_string(),
        available_from: if available { "Sofort" } else { "Nicht verfügbar" }.to_string(),
    }
}

/// Normalize one event record. Missing or unparseable dates map to the
/// epoch date rather than dropping the record.
pub fn event_view(record: EventRecord) -> EventView {
    let date = record
        .fields
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .unwrap_or_default();

    let description = record.fields.description.unwrap_or_default();

    EventView {
        id: record.id,
        title: record
            .fields
            .title
            .unwrap_or_else(|| UNNAMED_EVENT.to_string()),
        date,
        time: record.fields.time.unwrap_or_default(),
        location: record.fields.location.unwrap_or_default(),
        full_description: description.clone(),
        description,
        category: record.fields.category.unwrap_or_default(),
        organizer: String::new(),
        price: String::new(),
        max_participants: None,
        current_participants: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::records::{
        Asset, AssetFields, AssetFile, EventFields, GardenFields, Record, Sys,
    };

    fn empty_garden_record() -> GardenRecord {
        Record {
            id: "g0".to_string(),
            fields: GardenFields {
                titel: None,
                description: None,
                bilder: None,
                availability: None,
                size: None,
                ausstattungsmerkmale: None,
            },
            assets: Vec::new(),
        }
    }

    fn image_asset(id: &str, url: &str) -> Asset {
        Asset {
            sys: Sys { id: id.to_string() },
            fields: AssetFields {
                title: None,
                description: None,
                file: Some(AssetFile {
                    url: url.to_string(),
                    file_name: None,
                    content_type: None,
                    details: None,
                }),
            },
        }
    }

    #[test]
    fn test_all_defaults_for_empty_record() {
        let view = garden_view(empty_garden_record());

        assert_eq!(view.number, UNNAMED_GARDEN);
        assert_eq!(view.size_sqm, 0);
        assert_eq!(view.size_label(), "0 m²");
        assert!(view.features.is_empty());
        assert!(!view.available);
        assert_eq!(view.image, PLACEHOLDER_IMAGE);
        assert_eq!(view.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(view.description, "");
        assert_eq!(view.location, DEFAULT_LOCATION);
        assert_eq!(view.price, DEFAULT_PRICE);
        assert_eq!(view.available_from, "Nicht verfügbar");
    }

    #[test]
    fn test_asset_urls_get_secure_scheme() {
        let mut record = empty_garden_record();
        record.assets = vec![
            image_asset("a1", "//images.ctfassets.net/s/a1/laube.jpg"),
            image_asset("a2", "//images.ctfassets.net/s/a2/beet.jpg"),
        ];

        let view = garden_view(record);
        assert_eq!(view.image, "https://images.ctfassets.net/s/a1/laube.jpg");
        assert_eq!(
            view.images,
            vec![
                "https://images.ctfassets.net/s/a1/laube.jpg".to_string(),
                "https://images.ctfassets.net/s/a2/beet.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_asset_without_file_falls_back_to_placeholder() {
        let mut record = empty_garden_record();
        record.assets = vec![Asset {
            sys: Sys {
                id: "broken".to_string(),
            },
            fields: AssetFields {
                title: Some("no file attached".to_string()),
                description: None,
                file: None,
            },
        }];

        let view = garden_view(record);
        assert_eq!(view.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_available_record_keeps_fields() {
        let record = Record {
            id: "g1".to_string(),
            fields: GardenFields {
                titel: Some("A-15".to_string()),
                description: Some("Schöner Garten".to_string()),
                bilder: None,
                availability: Some(true),
                size: Some(250),
                ausstattungsmerkmale: Some(vec!["Laube".to_string()]),
            },
            assets: Vec::new(),
        };

        let view = garden_view(record);
        assert_eq!(view.number, "A-15");
        assert_eq!(view.size_label(), "250 m²");
        assert!(view.available);
        assert_eq!(view.available_from, "Sofort");
        assert_eq!(view.full_description, "Schöner Garten");
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let record = empty_garden_record();
        assert_eq!(garden_view(record.clone()), garden_view(record));
    }

    #[test]
    fn test_event_defaults_and_date_fallback() {
        let record: EventRecord = Record {
            id: "e0".to_string(),
            fields: EventFields {
                title: None,
                date: Some("kein datum".to_string()),
                time: None,
                location: None,
                description: None,
                category: None,
            },
            assets: Vec::new(),
        };

        let view = event_view(record);
        assert_eq!(view.title, UNNAMED_EVENT);
        assert_eq!(view.date, NaiveDate::default());
        assert_eq!(view.date_label(), "01.01.1970");
        assert_eq!(view.category, "");
        assert_eq!(view.category_label(), "Veranstaltung");
    }

    #[test]
    fn test_event_date_parses_iso() {
        let record: EventRecord = Record {
            id: "e1".to_string(),
            fields: EventFields {
                title: Some("Sommerfest".to_string()),
                date: Some("2024-06-25".to_string()),
                time: Some("15:00 - 22:00".to_string()),
                location: Some("Festwiese".to_string()),
                description: None,
                category: Some("fest".to_string()),
            },
            assets: Vec::new(),
        };

        let view = event_view(record);
        assert_eq!(view.date, NaiveDate::from_ymd_opt(2024, 6, 25).unwrap());
        assert_eq!(view.date_label(), "25.06.2024");
        assert_eq!(view.category_label(), "Fest");
    }
}
