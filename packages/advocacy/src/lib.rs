// Fathers' Rights Advocacy - Site Core
//
// In-process model behind the advocacy site: the community photo gallery and
// its moderation workflow, admin/uploader notifications, the FAQ assistant,
// the petition counter and the state resource directory.
//
// Everything lives for one page session inside `AdvocacySession`.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod session;

pub use config::*;
pub use session::AdvocacySession;
