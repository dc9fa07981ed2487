//! Cover icon rasterisation.
//!
//! Icons are drawn with hard edges on a supersampled canvas and then
//! downsampled, which yields anti-aliased output without a vector library.

pub mod canvas;
pub mod icons;

use image::DynamicImage;

use crate::constants::{MAX_PIXELS, SUPERSAMPLE};
use crate::errors::RenderError;
use crate::transform::{encode_image, resize_image, RenderParams};
use crate::validation::validate_size;
use crate::variant::{IconKind, ImageVariant};

pub use canvas::{Canvas, Shape};
pub use icons::draw_icon;

/// Renders the icon for `kind` as a square RGBA image
pub fn render_icon(kind: IconKind, params: &RenderParams) -> Result<DynamicImage, RenderError> {
    validate_size(params.size)?;

    let factor = supersample_factor(params.size);
    let mut canvas = Canvas::new(params.size * factor);
    draw_icon(&mut canvas, kind);
    let raster = canvas.into_image();

    if factor == 1 {
        return Ok(DynamicImage::ImageRgba8(raster));
    }
    resize_image(&raster, params.size, params.size)
}

/// Renders and encodes the image for a variant
pub fn render_variant(variant: ImageVariant, params: &RenderParams) -> Result<Vec<u8>, RenderError> {
    let img = render_icon(variant.kind(), params)?;
    let bytes = encode_image(&img, variant.format())?;

    tracing::debug!(
        variant = %variant,
        size = params.size,
        bytes = bytes.len(),
        "rendered icon"
    );
    Ok(bytes)
}

fn supersample_factor(size: u32) -> u32 {
    let edge = size as u64 * SUPERSAMPLE as u64;
    if edge * edge <= MAX_PIXELS {
        SUPERSAMPLE
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_icon_dimensions() {
        let img = render_icon(IconKind::Cloud, &RenderParams::new(Some(48))).unwrap();
        assert_eq!((img.width(), img.height()), (48, 48));
    }

    #[test]
    fn test_render_icon_rejects_bad_size() {
        let result = render_icon(IconKind::Zip, &RenderParams::new(Some(0)));
        assert!(matches!(result, Err(RenderError::InvalidParams(_))));
    }

    #[test]
    fn test_large_sizes_skip_supersampling() {
        assert_eq!(supersample_factor(128), SUPERSAMPLE);
        assert_eq!(supersample_factor(4096), 1);
    }

    #[test]
    fn test_render_variant_formats() {
        let params = RenderParams::new(Some(32));

        let png = render_variant(ImageVariant::AesPng, &params).unwrap();
        assert_eq!(&png[0..4], &[0x89, 0x50, 0x4E, 0x47]);

        let webp = render_variant(ImageVariant::AesWebp, &params).unwrap();
        assert_eq!(&webp[8..12], b"WEBP");

        let decoded = image::load_from_memory(&webp).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 32));
    }
}
