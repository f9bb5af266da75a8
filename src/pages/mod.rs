//! Pages
//!
//! One component per hash route; thin markup over the content and
//! filter layers.

mod home;
mod about;
mod gardens;
mod garden_detail;
mod events;
mod event_detail;
mod contact;
mod not_found;

pub use home::HomePage;
pub use about::AboutPage;
pub use gardens::GardensPage;
pub use garden_detail::GardenDetailPage;
pub use events::EventsPage;
pub use event_detail::EventDetailPage;
pub use contact::ContactPage;
pub use not_found::NotFoundPage;
