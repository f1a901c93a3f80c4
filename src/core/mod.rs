//! Core domain models and business logic for the landing site

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod gemini;
pub mod image_api;
pub mod image_cache;
pub mod lead;
pub mod reveal;
#[cfg(test)]
mod tests;

pub use contact::WhatsAppLink;
pub use image_cache::{
    CacheEntry, CacheHandle, EnsureOutcome, GENERATION_FAILED_NOTICE, GenerationRequest,
    ImageCache, ImageError, ImageGenerator, ImageServiceStatus, ImageStatus, ViewLifetime,
    ensure_image,
};
pub use lead::{LeadDetails, LeadError, ProjectType};
pub use reveal::{RevealId, RevealOptions, RevealState, RevealTracker, RevealTransition};
