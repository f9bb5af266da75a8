//! List Filtering
//!
//! Pure predicate logic over the normalized view models: garden search,
//! size buckets and feature tags, event month/category containment,
//! plus the small pagination and month-stepping helpers the list pages
//! share. Nothing here mutates its input or performs I/O.

use chrono::{Datelike, NaiveDate};

use crate::models::{EventView, GardenView};

/// Size buckets in m². Half-open: 250 is medium, 300 is large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeFilter {
    #[default]
    All,
    /// < 250 m²
    Small,
    /// 250 ..< 300 m²
    Medium,
    /// >= 300 m²
    Large,
}

impl SizeFilter {
    pub fn matches(&self, size_sqm: u32) -> bool {
        match self {
            SizeFilter::All => true,
            SizeFilter::Small => size_sqm < 250,
            SizeFilter::Medium => (250..300).contains(&size_sqm),
            SizeFilter::Large => size_sqm >= 300,
        }
    }

    /// Value used in the size `<select>`.
    pub fn key(&self) -> &'static str {
        match self {
            SizeFilter::All => "all",
            SizeFilter::Small => "small",
            SizeFilter::Medium => "medium",
            SizeFilter::Large => "large",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "small" => SizeFilter::Small,
            "medium" => SizeFilter::Medium,
            "large" => SizeFilter::Large,
            _ => SizeFilter::All,
        }
    }
}

/// Active criteria of the gardens page. Default is the identity filter
/// (restricted to availability).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GardenFilter {
    /// Case-insensitive substring against number, features and description
    pub search: String,
    pub size: SizeFilter,
    /// Selected tags; a garden must carry every one of them
    pub features: Vec<String>,
}

impl GardenFilter {
    pub fn active_count(&self) -> usize {
        let mut count = self.features.len();
        if !self.search.trim().is_empty() {
            count += 1;
        }
        if self.size != SizeFilter::All {
            count += 1;
        }
        count
    }
}

fn matches_search(garden: &GardenView, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    garden.number.to_lowercase().contains(&needle)
        || garden.description.to_lowercase().contains(&needle)
        || garden
            .features
            .iter()
            .any(|f| f.to_lowercase().contains(&needle))
}

/// Order-preserving subsequence of `gardens` matching all active
/// criteria. Unavailable gardens never appear in public listings.
pub fn filter_gardens(gardens: &[GardenView], filter: &GardenFilter) -> Vec<GardenView> {
    gardens
        .iter()
        .filter(|g| g.available)
        .filter(|g| filter.size.matches(g.size_sqm))
        .filter(|g| filter.features.iter().all(|tag| g.features.contains(tag)))
        .filter(|g| matches_search(g, &filter.search))
        .cloned()
        .collect()
}

/// Sorted, de-duplicated tag universe for the filter bar.
pub fn collect_features(gardens: &[GardenView]) -> Vec<String> {
    let mut features: Vec<String> = gardens
        .iter()
        .filter(|g| g.available)
        .flat_map(|g| g.features.iter().cloned())
        .collect();
    features.sort();
    features.dedup();
    features
}

/// Active criteria of the events page: one calendar month plus an
/// optional category ("all" matches every category).
#[derive(Debug, Clone, PartialEq)]
pub struct EventFilter {
    pub year: i32,
    pub month: u32,
    pub category: String,
}

/// Order-preserving subsequence of `events` inside the selected month
/// and category.
pub fn filter_events(events: &[EventView], filter: &EventFilter) -> Vec<EventView> {
    events
        .iter()
        .filter(|e| e.date.year() == filter.year && e.date.month() == filter.month)
        .filter(|e| filter.category == "all" || e.category == filter.category)
        .cloned()
        .collect()
}

/// The next `count` events on or after `today`, in date order.
pub fn upcoming_events(events: &[EventView], today: NaiveDate, count: usize) -> Vec<EventView> {
    let mut upcoming: Vec<EventView> = events
        .iter()
        .filter(|e| e.date >= today)
        .cloned()
        .collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming.truncate(count);
    upcoming
}

/// Prefix visible after `pages` clicks of "load more" at `page_size`
/// per page. Order-preserving; out-of-range requests clamp to the
/// whole list.
pub fn page_slice<T: Clone>(items: &[T], page_size: usize, pages: usize) -> Vec<T> {
    let visible = page_size.saturating_mul(pages).min(items.len());
    items[..visible].to_vec()
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// German month name for the events page header.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Januar",
        2 => "Februar",
        3 => "März",
        4 => "April",
        5 => "Mai",
        6 => "Juni",
        7 => "Juli",
        8 => "August",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        12 => "Dezember",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garden(id: &str, size: u32, features: &[&str], available: bool) -> GardenView {
        GardenView {
            id: id.to_string(),
            number: format!("P-{}", id),
            size_sqm: size,
            features: features.iter().map(|f| f.to_string()).collect(),
            available,
            image: "/images/test.jpg".to_string(),
            description: "Ein Garten mit Südlage".to_string(),
            full_description: String::new(),
            images: vec!["/images/test.jpg".to_string()],
            location: String::new(),
            price: String::new(),
            available_from: String::new(),
        }
    }

    fn event(id: &str, date: &str, category: &str) -> EventView {
        EventView {
            id: id.to_string(),
            title: format!("Termin {}", id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: String::new(),
            location: String::new(),
            description: String::new(),
            category: category.to_string(),
            full_description: String::new(),
            organizer: String::new(),
            price: String::new(),
            max_participants: None,
            current_participants: None,
        }
    }

    #[test]
    fn test_size_buckets_are_half_open() {
        assert!(SizeFilter::Small.matches(249));
        assert!(!SizeFilter::Small.matches(250));
        assert!(SizeFilter::Medium.matches(250));
        assert!(SizeFilter::Medium.matches(299));
        assert!(!SizeFilter::Medium.matches(300));
        assert!(SizeFilter::Large.matches(300));
    }

    #[test]
    fn test_default_filter_is_identity_restricted_to_availability() {
        let gardens = vec![
            garden("1", 250, &["Laube"], true),
            garden("2", 300, &[], false),
            garden("3", 200, &[], true),
        ];

        let result = filter_gardens(&gardens, &GardenFilter::default());
        let ids: Vec<&str> = result.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_feature_tags_use_and_semantics() {
        let gardens = vec![garden("1", 250, &["Laube", "Wasseranschluss"], true)];

        let both_carried = GardenFilter {
            features: vec!["Laube".to_string(), "Wasseranschluss".to_string()],
            ..Default::default()
        };
        assert_eq!(filter_gardens(&gardens, &both_carried).len(), 1);

        let one_missing = GardenFilter {
            features: vec!["Laube".to_string(), "Teich".to_string()],
            ..Default::default()
        };
        assert!(filter_gardens(&gardens, &one_missing).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_all_text_fields() {
        let gardens = vec![
            garden("1", 250, &["Laube"], true),
            garden("2", 250, &["Teich"], true),
        ];

        let by_feature = GardenFilter {
            search: "lAuBe".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_gardens(&gardens, &by_feature)[0].id, "1");

        let by_number = GardenFilter {
            search: "p-2".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_gardens(&gardens, &by_number)[0].id, "2");

        let by_description = GardenFilter {
            search: "südlage".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_gardens(&gardens, &by_description).len(), 2);
    }

    #[test]
    fn test_filtering_preserves_order_and_leaves_input_untouched() {
        let gardens = vec![
            garden("3", 300, &[], true),
            garden("1", 310, &[], true),
            garden("2", 200, &[], true),
        ];
        let before = gardens.clone();

        let filter = GardenFilter {
            size: SizeFilter::Large,
            ..Default::default()
        };
        let first = filter_gardens(&gardens, &filter);
        let second = filter_gardens(&gardens, &filter);

        assert_eq!(gardens, before);
        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_zero_matches_is_a_valid_outcome() {
        let gardens = vec![garden("1", 250, &[], true)];
        let filter = GardenFilter {
            search: "nirgendwo".to_string(),
            ..Default::default()
        };
        assert!(filter_gardens(&gardens, &filter).is_empty());
    }

    #[test]
    fn test_collect_features_is_sorted_and_deduped() {
        let gardens = vec![
            garden("1", 250, &["Teich", "Laube"], true),
            garden("2", 250, &["Laube", "Gewächshaus"], true),
            garden("3", 250, &["Strom"], false),
        ];

        assert_eq!(
            collect_features(&gardens),
            vec!["Gewächshaus", "Laube", "Teich"]
        );
    }

    #[test]
    fn test_event_month_containment() {
        let events = vec![
            event("1", "2024-06-15", "fest"),
            event("2", "2024-07-05", "versammlung"),
            event("3", "2024-06-30", "workshop"),
        ];

        let june = EventFilter {
            year: 2024,
            month: 6,
            category: "all".to_string(),
        };
        let filtered = filter_events(&events, &june);
        let ids: Vec<&str> = filtered
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);

        let june_workshops = EventFilter {
            category: "workshop".to_string(),
            ..june
        };
        assert_eq!(filter_events(&events, &june_workshops)[0].id, "3");
    }

    #[test]
    fn test_event_month_is_year_aware() {
        let events = vec![
            event("1", "2024-06-15", "fest"),
            event("2", "2025-06-15", "fest"),
        ];
        let filter = EventFilter {
            year: 2025,
            month: 6,
            category: "all".to_string(),
        };
        assert_eq!(filter_events(&events, &filter)[0].id, "2");
    }

    #[test]
    fn test_upcoming_events_sorts_and_limits() {
        let events = vec![
            event("1", "2024-08-10", "fest"),
            event("2", "2024-06-02", "fest"),
            event("3", "2024-07-01", "fest"),
            event("4", "2024-05-30", "fest"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let upcoming = upcoming_events(&events, today, 2);
        let ids: Vec<&str> = upcoming
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_page_slice_clamps_and_preserves_order() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(page_slice(&items, 2, 1), vec![1, 2]);
        assert_eq!(page_slice(&items, 2, 2), vec![1, 2, 3, 4]);
        assert_eq!(page_slice(&items, 2, 9), items);
        assert!(page_slice::<u32>(&[], 2, 1).is_empty());
    }

    #[test]
    fn test_month_stepping_wraps_at_year_boundaries() {
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(next_month(2024, 5), (2024, 6));
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(prev_month(2024, 5), (2024, 4));
        assert_eq!(month_name(3), "März");
    }
}
