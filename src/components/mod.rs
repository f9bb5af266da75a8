//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod navbar;
mod footer;
mod garden_card;
mod event_card;
mod image_gallery;
mod contact_form;

pub use navbar::NavBar;
pub use footer::Footer;
pub use garden_card::GardenCard;
pub use event_card::EventCard;
pub use image_gallery::ImageGallery;
pub use contact_form::ContactForm;
