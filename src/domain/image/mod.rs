mod image_ref;
mod patterns;

pub use image_ref::{ImageError, ImageRef};
pub use patterns::ENCODING_PREFIX;
