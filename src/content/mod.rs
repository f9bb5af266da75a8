//! Content Retrieval
//!
//! Everything between the remote content store and the pages: the CDA
//! client, wire shapes, normalization, the fallback catalog and the
//! `load_*` orchestration the pages call. Failures never cross this
//! boundary; pages always receive displayable view models.

pub mod client;
pub mod fallback;
pub mod normalize;
pub mod records;

mod tests;

use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;

pub use client::{ContentClient, ContentError};

use crate::models::{EventView, GardenView};
use normalize::{event_view, garden_view};
use records::{EventFields, GardenFields};

/// Outcome of one remote collection query, before fallback substitution.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// No client was configured; the network was never touched
    Unconfigured,
    /// The query ran and failed
    Failed(ContentError),
    /// The query succeeded, possibly with zero matches
    Entries(Vec<T>),
}

/// Substitute the catalog for anything but a non-empty remote result.
///
/// An empty remote result also selects the catalog. That conflates
/// "legitimately empty store" with "failed query" on purpose: the site
/// prefers showing the catalog over showing an empty listing.
pub fn or_fallback<T>(outcome: Fetched<T>, catalog: Vec<T>) -> Vec<T> {
    match outcome {
        Fetched::Entries(entries) if !entries.is_empty() => entries,
        _ => catalog,
    }
}

fn log_outcome<T>(page: &str, outcome: &Fetched<T>) {
    match outcome {
        Fetched::Unconfigured => web_sys::console::log_1(
            &format!("[CONTENT] {}: no content store configured, using fallback", page).into(),
        ),
        Fetched::Failed(err) => web_sys::console::error_1(
            &format!("[CONTENT] {}: query failed ({}), using fallback", page, err).into(),
        ),
        Fetched::Entries(entries) if entries.is_empty() => web_sys::console::log_1(
            &format!("[CONTENT] {}: store returned no entries, using fallback", page).into(),
        ),
        Fetched::Entries(entries) => web_sys::console::log_1(
            &format!("[CONTENT] {}: loaded {} entries", page, entries.len()).into(),
        ),
    }
}

/// Load the garden listing: remote entries when available, otherwise
/// the fallback catalog.
pub async fn load_gardens(client: Option<&ContentClient>) -> Vec<GardenView> {
    let outcome = match client {
        None => Fetched::Unconfigured,
        Some(client) => match client.entries::<GardenFields>("garden").await {
            Ok(records) => Fetched::Entries(records.into_iter().map(garden_view).collect()),
            Err(err) => Fetched::Failed(err),
        },
    };
    log_outcome("gardens", &outcome);
    or_fallback(outcome, fallback::garden_catalog())
}

/// Load one garden by id. A remote hit wins; anything else (no client,
/// error, unknown remote id) falls through to the catalog, so catalog
/// cards always resolve to a detail page. Unknown ids are `None`.
pub async fn load_garden(client: Option<&ContentClient>, id: &str) -> Option<GardenView> {
    if let Some(client) = client {
        match client.entry_by_id::<GardenFields>("garden", id).await {
            Ok(Some(record)) => return Some(garden_view(record)),
            Ok(None) => {}
            Err(err) => web_sys::console::error_1(
                &format!("[CONTENT] garden {}: lookup failed ({})", id, err).into(),
            ),
        }
    }
    fallback::garden_by_id(id)
}

/// Load the event listing, anchored to `today` for the fallback catalog.
pub async fn load_events(client: Option<&ContentClient>, today: NaiveDate) -> Vec<EventView> {
    let outcome = match client {
        None => Fetched::Unconfigured,
        Some(client) => match client.entries::<EventFields>("event").await {
            Ok(records) => Fetched::Entries(records.into_iter().map(event_view).collect()),
            Err(err) => Fetched::Failed(err),
        },
    };
    log_outcome("events", &outcome);
    or_fallback(outcome, fallback::event_catalog(today))
}

/// Load one event by id, same resolution order as [`load_garden`].
pub async fn load_event(
    client: Option<&ContentClient>,
    id: &str,
    today: NaiveDate,
) -> Option<EventView> {
    if let Some(client) = client {
        match client.entry_by_id::<EventFields>("event", id).await {
            Ok(Some(record)) => return Some(event_view(record)),
            Ok(None) => {}
            Err(err) => web_sys::console::error_1(
                &format!("[CONTENT] event {}: lookup failed ({})", id, err).into(),
            ),
        }
    }
    fallback::event_by_id(id, today)
}

/// Issues monotonically increasing tokens for in-flight fetches so a
/// settling result is only applied while it is still the latest one a
/// page asked for. Late results from superseded fetches are dropped.
#[derive(Clone, Default)]
pub struct RequestGuard {
    latest: Rc<Cell<u64>>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating every earlier token.
    pub fn issue(&self) -> RequestToken {
        let token = self.latest.get() + 1;
        self.latest.set(token);
        RequestToken {
            latest: Rc::clone(&self.latest),
            token,
        }
    }
}

/// Token for one fetch; check [`RequestToken::is_current`] before
/// applying the settled result.
pub struct RequestToken {
    latest: Rc<Cell<u64>>,
    token: u64,
}

impl RequestToken {
    pub fn is_current(&self) -> bool {
        self.latest.get() == self.token
    }
}
