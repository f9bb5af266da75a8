//! Grüne Oase Frontend App
//!
//! Root component: provides the site context, tracks the hash route
//! and switches pages.

use leptos::prelude::*;

use crate::components::{Footer, NavBar};
use crate::context::SiteContext;
use crate::pages::{
    AboutPage, ContactPage, EventDetailPage, EventsPage, GardenDetailPage, GardensPage, HomePage,
    NotFoundPage,
};
use crate::route::{self, Route};

#[component]
pub fn App() -> impl IntoView {
    let (current_route, set_route) = signal(route::current_route());
    route::watch_hash(set_route);

    // Client + today anchor, shared with every page
    provide_context(SiteContext::from_env());

    view! {
        <div class="site-layout">
            <NavBar route=current_route />

            <main class="page-content">
                {move || match current_route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::About => view! { <AboutPage /> }.into_any(),
                    Route::Gardens => view! { <GardensPage /> }.into_any(),
                    Route::GardenDetail(id) => view! { <GardenDetailPage id=id /> }.into_any(),
                    Route::Events => view! { <EventsPage /> }.into_any(),
                    Route::EventDetail(id) => view! { <EventDetailPage id=id /> }.into_any(),
                    Route::Contact { garden } => view! { <ContactPage garden=garden /> }.into_any(),
                    Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}
