//! Content Layer Scenario Tests
//!
//! Cross-module tests: CDA envelope decoding against a JSON fixture,
//! fallback substitution triggers, and end-to-end filtering over the
//! canonical catalog.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::content::normalize::garden_view;
    use crate::content::records::{EntryCollection, GardenFields};
    use crate::content::{fallback, or_fallback, ContentError, Fetched, RequestGuard};
    use crate::filter::{filter_gardens, GardenFilter, SizeFilter};
    use crate::models::GardenView;

    /// Trimmed-down CDA response: two garden entries, one linked asset,
    /// one dangling asset link.
    const GARDEN_RESPONSE: &str = r#"{
        "total": 2,
        "skip": 0,
        "limit": 100,
        "items": [
            {
                "sys": { "id": "g1" },
                "fields": {
                    "titel": "A-15",
                    "description": "Sonnige Parzelle",
                    "bilder": [
                        { "sys": { "id": "asset1" } },
                        { "sys": { "id": "missing" } }
                    ],
                    "availability": true,
                    "size": 250,
                    "ausstattungsmerkmale": ["Laube", "Wasseranschluss"]
                }
            },
            {
                "sys": { "id": "g2" },
                "fields": {}
            }
        ],
        "includes": {
            "Asset": [
                {
                    "sys": { "id": "asset1" },
                    "fields": {
                        "title": "Laube von außen",
                        "file": {
                            "url": "//images.ctfassets.net/space/asset1/laube.jpg",
                            "fileName": "laube.jpg",
                            "contentType": "image/jpeg",
                            "details": {
                                "size": 183749,
                                "image": { "width": 1200, "height": 800 }
                            }
                        }
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn test_envelope_decodes_and_resolves_asset_links() {
        let collection: EntryCollection<GardenFields> =
            serde_json::from_str(GARDEN_RESPONSE).expect("fixture should decode");
        assert_eq!(collection.total, 2);

        let records = collection.into_records();
        assert_eq!(records.len(), 2);

        // Links resolve in order; the dangling one is skipped.
        assert_eq!(records[0].assets.len(), 1);
        assert_eq!(records[0].assets[0].sys.id, "asset1");
        assert!(records[1].assets.is_empty());

        let views: Vec<GardenView> = records.into_iter().map(garden_view).collect();
        assert_eq!(
            views[0].image,
            "https://images.ctfassets.net/space/asset1/laube.jpg"
        );
        assert_eq!(views[0].number, "A-15");
        // The bare entry still normalizes, all defaults.
        assert_eq!(views[1].number, "Unnamed Garden");
        assert_eq!(views[1].size_label(), "0 m²");
    }

    #[test]
    fn test_fallback_fires_when_unconfigured() {
        let shown = or_fallback(Fetched::Unconfigured, fallback::garden_catalog());
        assert_eq!(shown.len(), 5);
        assert_eq!(shown[0].number, "A-15");
    }

    #[test]
    fn test_fallback_fires_on_query_failure() {
        let outcome: Fetched<GardenView> = Fetched::Failed(ContentError::Status(500));
        let shown = or_fallback(outcome, fallback::garden_catalog());
        assert_eq!(shown.len(), 5);
    }

    #[test]
    fn test_fallback_fires_on_empty_result() {
        let outcome: Fetched<GardenView> = Fetched::Entries(Vec::new());
        let shown = or_fallback(outcome, fallback::garden_catalog());
        assert_eq!(shown.len(), 5);
    }

    #[test]
    fn test_non_empty_remote_result_wins() {
        let remote = vec![fallback::garden_by_id("3").unwrap()];
        let shown = or_fallback(Fetched::Entries(remote.clone()), fallback::garden_catalog());
        assert_eq!(shown, remote);
    }

    #[test]
    fn test_catalog_filtered_large_returns_ids_2_and_4_in_order() {
        let filter = GardenFilter {
            size: SizeFilter::Large,
            ..Default::default()
        };
        let result = filter_gardens(&fallback::garden_catalog(), &filter);

        let ids: Vec<&str> = result.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_catalog_filtered_by_wasseranschluss_excludes_b07() {
        let filter = GardenFilter {
            features: vec!["Wasseranschluss".to_string()],
            ..Default::default()
        };
        let result = filter_gardens(&fallback::garden_catalog(), &filter);

        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|g| g.number != "B-07"));
    }

    #[test]
    fn test_catalog_lookup_never_panics() {
        assert!(fallback::garden_by_id("does-not-exist").is_none());
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(fallback::event_by_id("does-not-exist", today).is_none());
    }

    #[test]
    fn test_request_guard_drops_superseded_results() {
        let guard = RequestGuard::new();

        let first = guard.issue();
        assert!(first.is_current());

        // A second fetch starts before the first settles.
        let second = guard.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_stale_token_gates_every_application_of_a_double_fetch() {
        let guard = RequestGuard::new();
        let stale = guard.issue();
        let fresh = guard.issue();

        // A settled fetch that loaded two lists applies both or neither.
        let mut gardens = Vec::new();
        let mut events = Vec::new();
        if stale.is_current() {
            gardens = vec!["alt"];
            events = vec!["alt"];
        }
        if fresh.is_current() {
            gardens = vec!["neu"];
            events = vec!["neu"];
        }

        assert_eq!(gardens, vec!["neu"]);
        assert_eq!(events, vec!["neu"]);
    }
}
