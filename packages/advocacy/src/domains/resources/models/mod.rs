pub mod state_resource;
pub mod states;

pub use state_resource::*;
pub use states::{canonical_state_name, US_STATES};
