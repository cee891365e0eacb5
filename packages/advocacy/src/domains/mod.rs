pub mod faq;
pub mod gallery;
pub mod notifications;
pub mod petition;
pub mod resources;
