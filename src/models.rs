//! View Models
//!
//! Display-ready shapes produced by the content normalizer and consumed
//! by the pages. Instances live in page-local signals for one render
//! cycle and are discarded on navigation.

use chrono::NaiveDate;

/// A garden plot, normalized for display
#[derive(Debug, Clone, PartialEq)]
pub struct GardenView {
    pub id: String,
    /// Plot number, e.g. "A-15"
    pub number: String,
    /// Size in square meters (0 when the record carries none)
    pub size_sqm: u32,
    pub features: Vec<String>,
    pub available: bool,
    /// Primary image URL; never empty, falls back to the placeholder path
    pub image: String,
    pub description: String,
    /// Long-form text for the detail page (markdown)
    pub full_description: String,
    /// Every resolved image URL; never empty
    pub images: Vec<String>,
    pub location: String,
    pub price: String,
    pub available_from: String,
}

impl GardenView {
    /// Size with unit suffix, e.g. "250 m²". Kept even for the fallback 0.
    pub fn size_label(&self) -> String {
        format!("{} m²", self.size_sqm)
    }
}

/// A club event, normalized for display
#[derive(Debug, Clone, PartialEq)]
pub struct EventView {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Free-form time range, e.g. "14:00 - 18:00"
    pub time: String,
    pub location: String,
    pub description: String,
    /// Category key: "fest", "workshop" or "versammlung"; empty when unset
    pub category: String,
    /// Long-form text for the detail page (markdown)
    pub full_description: String,
    pub organizer: String,
    pub price: String,
    pub max_participants: Option<u32>,
    pub current_participants: Option<u32>,
}

impl EventView {
    /// German date format, e.g. "15.06.2024"
    pub fn date_label(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }

    /// Human-readable category name
    pub fn category_label(&self) -> &'static str {
        match self.category.as_str() {
            "fest" => "Fest",
            "workshop" => "Workshop",
            "versammlung" => "Versammlung",
            _ => "Veranstaltung",
        }
    }

    /// True when every seat is taken (only meaningful with a known capacity)
    pub fn fully_booked(&self) -> bool {
        match (self.current_participants, self.max_participants) {
            (Some(current), Some(max)) => current >= max,
            _ => false,
        }
    }
}
