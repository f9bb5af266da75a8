//! Garden Card Component
//!
//! One catalog entry in the gardens grid, linking to its detail page.

use leptos::prelude::*;

use crate::markdown::parse_markdown_inline;
use crate::models::GardenView;

#[component]
pub fn GardenCard(garden: GardenView) -> impl IntoView {
    let href = format!("#/gardens/{}", garden.id);
    let description_html = parse_markdown_inline(&garden.description);
    let features = garden.features.clone();

    view! {
        <a class="garden-card" href=href>
            <div class="garden-card-image">
                <img src=garden.image.clone() alt=format!("Garten {}", garden.number) />
                <span class="garden-card-size">{garden.size_label()}</span>
            </div>
            <div class="garden-card-body">
                <h3>{format!("Garten {}", garden.number)}</h3>
                <p class="garden-card-description" inner_html=description_html></p>
                <div class="feature-badges">
                    {features.into_iter().map(|feature| view! {
                        <span class="feature-badge">{feature}</span>
                    }).collect_view()}
                </div>
            </div>
        </a>
    }
}
