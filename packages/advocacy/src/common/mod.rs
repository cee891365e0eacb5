// Common types shared across domains

pub mod entity_ids;
pub mod id;
pub mod validation;

pub use entity_ids::*;
pub use id::Id;
pub use validation::{is_blank, is_valid_email};
