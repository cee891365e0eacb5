//! Kernel module - session infrastructure and dependencies.

pub mod deps;
pub mod email;
pub mod test_dependencies;
pub mod traits;

pub use deps::SessionDeps;
pub use email::LoggingEmailService;
pub use traits::*;
