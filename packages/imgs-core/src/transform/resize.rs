use crate::constants::MAX_PIXELS;
use crate::errors::RenderError;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{DynamicImage, RgbaImage};

/// Downsamples an RGBA image with a Lanczos3 filter.
///
/// Alpha is premultiplied during convolution so transparent edges
/// do not bleed dark fringes into the result.
pub fn resize_image(
    img: &RgbaImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, RenderError> {
    let total_pixels = target_w as u64 * target_h as u64;
    if total_pixels > MAX_PIXELS {
        return Err(RenderError::ResolutionTooLarge {
            width: target_w,
            height: target_h,
        });
    }

    let src_image = Image::from_vec_u8(
        img.width(),
        img.height(),
        img.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(|e| RenderError::ProcessingFailed(format!("failed to create source image: {e}")))?;

    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x4);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new()
                .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
                .use_alpha(true),
        )
        .map_err(|e| RenderError::ProcessingFailed(format!("resize failed: {e}")))?;

    let resized = RgbaImage::from_raw(target_w, target_h, dst_image.into_vec()).ok_or_else(|| {
        RenderError::ProcessingFailed("failed to convert resized image".to_string())
    })?;

    Ok(DynamicImage::ImageRgba8(resized))
}
