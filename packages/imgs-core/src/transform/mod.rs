pub mod encode;
pub mod params;
pub mod resize;

pub use encode::encode_image;
pub use params::{OutputFormat, RenderParams};
pub use resize::resize_image;
