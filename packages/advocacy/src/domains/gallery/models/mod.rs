pub mod image_record;

pub use image_record::{seed_images, ImageRecord, ImageStatus};
