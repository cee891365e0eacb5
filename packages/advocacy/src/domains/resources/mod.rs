//! State-by-state resource directory.

pub mod directory;
pub mod models;

pub use directory::{ResourceFilter, ResourceSections, StateDirectory};
pub use models::{KeyStatistics, LegalAidContact, StateResource, SupportGroup, US_STATES};
