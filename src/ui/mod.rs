pub mod ad_samples;
pub mod background;
pub mod common;
pub mod icon;
pub mod image_store;
pub mod lead_form;
pub mod pages;
pub mod reveal;

pub use icon::{Icon, icons};
pub use image_store::{IMAGE_SERVICE_META, ImageStore, provide_image_store, use_image_store};
pub use pages::{LandingPage, NotFoundPage};
pub use reveal::{Reveal, RevealContext, provide_reveal_context};
