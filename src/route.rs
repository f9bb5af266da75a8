//! Hash Routing
//!
//! The site navigates through location-hash fragments (`#/gardens/4`),
//! parsed by a pure function into a [`Route`] held in one signal. Plain
//! anchors change the hash; a `hashchange` listener feeds the signal.

use leptos::prelude::*;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Gardens,
    GardenDetail(String),
    Events,
    EventDetail(String),
    Contact {
        /// Garden number carried over from a detail page, prefills the subject
        garden: Option<String>,
    },
    NotFound,
}

impl Route {
    /// Which navbar entry lights up for this route.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Gardens | Route::GardenDetail(_) => "gardens",
            Route::Events | Route::EventDetail(_) => "events",
            Route::Contact { .. } => "contact",
            Route::NotFound => "",
        }
    }
}

/// Parse a location hash into a route. Unknown paths are `NotFound`.
pub fn parse_route(hash: &str) -> Route {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    let (path, query) = match path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path, None),
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Route::Home,
        ["about"] => Route::About,
        ["gardens"] => Route::Gardens,
        ["gardens", id] => Route::GardenDetail(decode(id)),
        ["events"] => Route::Events,
        ["events", id] => Route::EventDetail(decode(id)),
        ["contact"] => Route::Contact {
            garden: query.and_then(|q| query_param(q, "garden")),
        },
        _ => Route::NotFound,
    }
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| decode(value))
}

/// Contact-page href carrying a garden number for the subject prefill.
pub fn contact_href(garden_number: &str) -> String {
    format!(
        "#/contact?garden={}",
        utf8_percent_encode(garden_number, NON_ALPHANUMERIC)
    )
}

/// The route currently in the address bar.
pub fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    parse_route(&hash)
}

/// Keep `set_route` in sync with the address bar for the lifetime of
/// the app. The listener is installed once and intentionally leaked.
pub fn watch_hash(set_route: WriteSignal<Route>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let on_change = Closure::<dyn FnMut(web_sys::HashChangeEvent)>::new(
        move |_: web_sys::HashChangeEvent| {
            set_route.set(current_route());
        },
    );
    if window
        .add_event_listener_with_callback("hashchange", on_change.as_ref().unchecked_ref())
        .is_ok()
    {
        on_change.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_static_routes() {
        assert_eq!(parse_route(""), Route::Home);
        assert_eq!(parse_route("#/"), Route::Home);
        assert_eq!(parse_route("#/about"), Route::About);
        assert_eq!(parse_route("#/gardens"), Route::Gardens);
        assert_eq!(parse_route("#/events"), Route::Events);
    }

    #[test]
    fn test_parses_detail_routes() {
        assert_eq!(
            parse_route("#/gardens/4"),
            Route::GardenDetail("4".to_string())
        );
        assert_eq!(
            parse_route("#/events/abc123"),
            Route::EventDetail("abc123".to_string())
        );
    }

    #[test]
    fn test_contact_query_is_decoded() {
        assert_eq!(parse_route("#/contact"), Route::Contact { garden: None });
        assert_eq!(
            parse_route("#/contact?garden=A%2D15"),
            Route::Contact {
                garden: Some("A-15".to_string())
            }
        );
    }

    #[test]
    fn test_contact_href_round_trips() {
        let href = contact_href("A-15");
        assert_eq!(
            parse_route(&href),
            Route::Contact {
                garden: Some("A-15".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(parse_route("#/shop"), Route::NotFound);
        assert_eq!(parse_route("#/gardens/4/edit"), Route::NotFound);
    }

    #[test]
    fn test_nav_key_groups_detail_pages() {
        assert_eq!(Route::GardenDetail("1".to_string()).nav_key(), "gardens");
        assert_eq!(Route::EventDetail("1".to_string()).nav_key(), "events");
    }
}
