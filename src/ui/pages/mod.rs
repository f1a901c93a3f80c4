//! Application pages module
//!
//! - Landing page (the whole site)
//! - 404 page for unknown routes

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
