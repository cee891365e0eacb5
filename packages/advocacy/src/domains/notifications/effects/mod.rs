pub mod email;

pub use email::{render_email, EmailNotifier};
