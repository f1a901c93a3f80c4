//! Common reusable UI components
//!
//! Loading states shared by the page sections.

pub mod spinner;

pub use spinner::{Deferred, SectionSkeleton, Skeleton, Spinner, SpinnerSize};
