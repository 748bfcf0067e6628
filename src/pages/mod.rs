//! Concrete pages of the site.
//!
//! Each page fills the two hooks of the render pipeline
//! ([`crate::render::Page`]) with its own markup. A page that reads the
//! settings store declares its required keys together with a fixed
//! fallback record, so it renders even when the store is down.

mod contact;
mod impressum;
mod login;

pub use contact::ContactPage;
pub use impressum::ImpressumPage;
pub use login::LoginPage;
