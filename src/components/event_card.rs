//! Event Card Component

use leptos::prelude::*;

use crate::models::EventView;

#[component]
pub fn EventCard(event: EventView) -> impl IntoView {
    let href = format!("#/events/{}", event.id);
    let category_class = format!("event-category {}", event.category);

    view! {
        <a class="event-card" href=href>
            <div class="event-card-header">
                <span class=category_class>{event.category_label()}</span>
                <span class="event-date">{event.date_label()}</span>
            </div>
            <h3>{event.title.clone()}</h3>
            <p class="event-meta">{format!("{} · {}", event.time, event.location)}</p>
            <p class="event-description">{event.description.clone()}</p>
        </a>
    }
}
