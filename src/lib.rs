pub mod chunks;
pub mod icon;
mod filters;
mod image_data;
mod pixel;
mod png;
mod utils;

pub use filters::Filter;
pub use pixel::Pixel;
pub use png::{parse_signature, PNG, SIGNATURE};
