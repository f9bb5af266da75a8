//! Application Context
//!
//! Shared handles provided via the Leptos Context API: the optional
//! content-store client and the date anchor for the event catalog.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;

use crate::content::ContentClient;

/// Site-wide context, provided once by `App` and read by every page.
#[derive(Clone)]
pub struct SiteContext {
    /// `None` means the site runs in permanent fallback mode
    pub client: Option<ContentClient>,
    /// "Today" for the event catalog anchor and upcoming-event widgets
    pub today: NaiveDate,
}

impl SiteContext {
    pub fn from_env() -> Self {
        Self {
            client: ContentClient::from_env(),
            today: Local::now().date_naive(),
        }
    }
}

/// Shorthand for pages; panics only on a programming error (a page
/// rendered outside `App`).
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext should be provided")
}
